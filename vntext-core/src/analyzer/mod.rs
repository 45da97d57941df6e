//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Canonicalizes Unicode and lowercases
//! - **Diacritics**: Folds accented letters to plain Latin
//! - **Spaces**: Collapses whitespace and blank lines
//! - **Tokenizer**: Splits text into punctuation-trimmed words
//! - **NGram**: Counts contiguous word windows
//! - **Pipeline**: Chains the above behind one config

pub mod diacritics;
pub mod ngram;
pub mod normalizer;
pub mod pipeline;
pub mod spaces;
pub mod tokenizer;

pub use diacritics::DiacriticFolder;
pub use ngram::{NGramBuilder, NGramCounts, NGramExtractor};
pub use normalizer::{NormalizationForm, NormalizerConfig, TextNormalizer};
pub use pipeline::Analyzer;
pub use spaces::SpaceCollapser;
pub use tokenizer::Tokenizer;
