//! Punctuation-aware word tokenizer.
//!
//! Splits text into words the way a reader would count them, with special
//! care for punctuation that belongs *inside* a word.
//!
//! ## What It Does
//!
//! Input is cut at whitespace and newlines. Each fragment is then trimmed
//! down to the span between its first and last alphanumeric character, as
//! defined by the [`CharClassTable`]:
//!
//! ```text
//! "Sẻ        →  Sẻ
//! (NDB       →  NDB
//! 2.0)       →  2.0
//! http://www.gametv1.vn.  →  http://www.gametv1.vn
//! ______     →  (dropped)
//! ```
//!
//! Punctuation between two alphanumeric characters survives, so decimals,
//! abbreviations like `U.S.A` and URLs stay in one piece. A fragment with no
//! alphanumeric character at all is dropped; the tokenizer never emits an
//! empty word.
//!
//! ## Zero Allocation
//!
//! Words are slices (`&str`) of the input. The streaming [`Tokenizer::tokenize`]
//! form does not allocate at all; [`Tokenizer::words`] only allocates the
//! output `Vec`.
//!
//! ## Usage
//!
//! ```rust
//! use vntext_core::analyzer::Tokenizer;
//! use vntext_core::charset::CharClassTable;
//!
//! let table = CharClassTable::new();
//! let tokenizer = Tokenizer::new(&table);
//!
//! assert_eq!(tokenizer.words("2.0 sẽ thêm."), vec!["2.0", "sẽ", "thêm"]);
//! ```

use crate::charset::CharClassTable;

/// Splits text into trimmed words.
///
/// Holds only a reference to the class table, so it is `Copy` and cheap to
/// create per call site.
#[derive(Debug, Copy, Clone)]
pub struct Tokenizer<'t> {
    table: &'t CharClassTable,
}

impl<'t> Tokenizer<'t> {
    /// Creates a tokenizer over the given class table.
    #[inline]
    pub const fn new(table: &'t CharClassTable) -> Self {
        Self { table }
    }

    /// Tokenizes `text` and emits `(word, position)` for each word.
    ///
    /// Positions count emitted words from zero; dropped fragments do not
    /// consume a position. After emitting a word at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let mut pos = 0u32;

        for fragment in text.split(char::is_whitespace) {
            let Some(word) = self.trim_word(fragment) else {
                continue;
            };

            emit(word, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }

    /// Collects the words of `text` in order.
    pub fn words<'n>(&self, text: &'n str) -> Vec<&'n str> {
        let mut out = Vec::new();
        self.tokenize(text, |word, _| out.push(word));
        out
    }

    /// Trims one whitespace-free fragment to its alphanumeric span.
    ///
    /// Returns `None` if the fragment has no alphanumeric character.
    #[inline]
    pub fn trim_word<'n>(&self, fragment: &'n str) -> Option<&'n str> {
        let table = self.table;

        let start = fragment
            .char_indices()
            .find(|&(_, c)| table.is_alphanumeric(c))
            .map(|(i, _)| i)?;

        // A first alphanumeric exists, so a last one does too.
        let end = fragment
            .char_indices()
            .rev()
            .find(|&(_, c)| table.is_alphanumeric(c))
            .map(|(i, c)| i + c.len_utf8())?;

        Some(&fragment[start..end])
    }
}
