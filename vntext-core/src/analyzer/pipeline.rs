//! Configurable text pipeline.
//!
//! Chains the individual stages in their fixed order:
//!
//! ```text
//! raw ─► normalize ─► fold diacritics ─► lowercase ─► collapse spaces ─► tokenize ─► n-grams
//! ```
//!
//! Each text stage is switched on or off by [`AnalyzerConfig`]. Tokenizing
//! always runs, so punctuation stripping happens regardless of config.

use tracing::trace;
use vntext_types::AnalyzerConfig;

use crate::analyzer::diacritics::DiacriticFolder;
use crate::analyzer::ngram::{words_to_ngrams, NGramCounts};
use crate::analyzer::normalizer::{lowercase_into, TextNormalizer};
use crate::analyzer::spaces::SpaceCollapser;
use crate::analyzer::tokenizer::Tokenizer;
use crate::charset::CharClassTable;

/// Runs the configured text stages, then tokenizes.
///
/// # Examples
///
/// ```
/// use vntext_core::analyzer::Analyzer;
/// use vntext_core::charset::CharClassTable;
/// use vntext_types::AnalyzerConfig;
///
/// let table = CharClassTable::new();
/// let analyzer = Analyzer::new(&table, AnalyzerConfig::search_key());
///
/// assert_eq!(analyzer.analyze("  Đường   PHỐ \n\n"), "duong pho");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'t> {
    config: AnalyzerConfig,
    normalizer: TextNormalizer,
    folder: DiacriticFolder,
    collapser: SpaceCollapser,
    tokenizer: Tokenizer<'t>,
}

impl<'t> Analyzer<'t> {
    pub fn new(table: &'t CharClassTable, config: AnalyzerConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::default(),
            folder: DiacriticFolder::new(),
            collapser: SpaceCollapser::new(),
            tokenizer: Tokenizer::new(table),
        }
    }

    /// Replaces the normalizer, e.g. to use NFC instead of NFKC.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn config(&self) -> AnalyzerConfig {
        self.config
    }

    /// Applies the enabled text stages and returns the prepared text.
    pub fn analyze(&self, text: &str) -> String {
        let mut cur = String::with_capacity(text.len());
        let mut scratch = String::with_capacity(text.len());
        cur.push_str(text);

        if self.config.normalize {
            self.normalizer.normalize_into(&cur, &mut scratch);
            std::mem::swap(&mut cur, &mut scratch);
        }
        if self.config.fold_diacritics {
            self.folder.fold_into(&cur, &mut scratch);
            std::mem::swap(&mut cur, &mut scratch);
        }
        if self.config.lowercase {
            lowercase_into(&cur, &mut scratch);
            std::mem::swap(&mut cur, &mut scratch);
        }
        if self.config.collapse_spaces {
            self.collapser.collapse_into(&cur, &mut scratch);
            std::mem::swap(&mut cur, &mut scratch);
        }

        trace!(input_len = text.len(), output_len = cur.len(), "analyzed text");
        cur
    }

    /// Tokenizes already-prepared text.
    #[inline]
    pub fn words<'n>(&self, prepared: &'n str) -> Vec<&'n str> {
        self.tokenizer.words(prepared)
    }

    /// Prepares `text`, tokenizes it and returns owned words.
    pub fn analyze_words(&self, text: &str) -> Vec<String> {
        let prepared = self.analyze(text);
        self.words(&prepared).into_iter().map(str::to_owned).collect()
    }

    /// Runs the whole pipeline and counts word n-grams.
    pub fn ngrams(&self, text: &str, n: usize) -> NGramCounts {
        let prepared = self.analyze(text);
        let words = self.words(&prepared);
        let counts = words_to_ngrams(&words, n);
        trace!(words = words.len(), n, distinct = counts.len(), "counted n-grams");
        counts
    }
}
