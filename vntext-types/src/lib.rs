//! Core types shared across the vntext text pipeline.
//!
//! This crate holds the value types that both the pipeline and its callers
//! need to name, kept apart from the algorithms so that:
//!
//! - **Errors are uniform**: every fallible call returns [`Result`]
//! - **Configuration is plain data**: `Copy` structs with named presets
//! - **No circular dependencies**: `vntext-core` depends on this crate, never the reverse

#![warn(missing_docs)]

use core::fmt;

use thiserror::Error;

/// Membership class of a code point in the fixed alphabet.
///
/// Every letter belongs to exactly one of `LowerLetter` / `UpperLetter`.
/// `Numeric` covers the ASCII digits. The wider "alphanumeric" class is the
/// union of all three and is answered by the class table directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CodepointClass {
    /// `0`..=`9`
    Numeric = 0,
    /// A lowercase letter from the Vietnamese inventory.
    LowerLetter = 1,
    /// The uppercase twin of a `LowerLetter`.
    UpperLetter = 2,
}

impl CodepointClass {
    /// Returns true for both letter classes.
    #[inline(always)]
    pub const fn is_letter(self) -> bool {
        matches!(self, CodepointClass::LowerLetter | CodepointClass::UpperLetter)
    }
}

/// Deterministic 64-bit fingerprint of a string.
///
/// Values are stable across runs and processes, so they can be persisted and
/// compared later for deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Returns the raw unsigned value.
    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the same 64 bits reinterpreted as a signed integer.
    ///
    /// Useful for storage engines that only have a signed 64-bit column type.
    #[inline(always)]
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }
}

impl From<u64> for Fingerprint {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Fingerprint> for u64 {
    #[inline(always)]
    fn from(f: Fingerprint) -> Self {
        f.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Ordered sequence of code points used for random sampling.
///
/// Duplicate entries are legal and make the duplicated symbol proportionally
/// more likely to be drawn. Alphabets are never de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ASCII_DIGITS: &str = "0123456789";

impl Alphabet {
    /// Builds an alphabet from any sequence of code points, keeping order and duplicates.
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Builds an alphabet from the code points of a string.
    pub fn from_str_chars(s: &str) -> Self {
        Self::new(s.chars())
    }

    /// `a-z` and `A-Z`.
    pub fn ascii_letters() -> Self {
        Self::from_str_chars(ASCII_LETTERS)
    }

    /// `0-9`, `a-z` and `A-Z`.
    pub fn ascii_alphanumeric() -> Self {
        Self::new(ASCII_DIGITS.chars().chain(ASCII_LETTERS.chars()))
    }

    /// The symbols in sampling order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// Number of entries, duplicates included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if there is nothing to sample from.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if `c` appears at least once.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Errors produced by the pipeline and its document boundary.
///
/// The text transforms themselves are total; only the random generator and
/// the document boundary can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A caller passed an argument outside the operation's contract.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// A document query string could not be parsed.
    #[error("query syntax error in {query:?}: {reason}")]
    QuerySyntax {
        /// The offending query.
        query: String,
        /// Parser message from the query engine.
        reason: String,
    },

    /// The document tree was absent or unusable.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid content.
        reason: String,
    },

    /// A base URL could not be parsed.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },
}

impl TextError {
    /// Shorthand for [`TextError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        TextError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`TextError::QuerySyntax`].
    pub fn query_syntax(query: impl Into<String>, reason: impl Into<String>) -> Self {
        TextError::QuerySyntax {
            query: query.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`TextError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        TextError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout vntext.
pub type Result<T> = core::result::Result<T, TextError>;

/// Which text transforms an analyzer applies before tokenizing.
///
/// Transforms run in field order: normalize, fold diacritics, lowercase,
/// collapse spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Canonicalize to a single Unicode representation first.
    pub normalize: bool,
    /// Map accented letters to their plain Latin base letter.
    pub fold_diacritics: bool,
    /// Unicode-aware lowercasing.
    pub lowercase: bool,
    /// Collapse whitespace runs and drop blank lines.
    pub collapse_spaces: bool,
}

impl Default for AnalyzerConfig {
    /// Lowercase only, which is what n-gram extraction from raw text expects.
    fn default() -> Self {
        Self {
            normalize: false,
            fold_diacritics: false,
            lowercase: true,
            collapse_spaces: false,
        }
    }
}

impl AnalyzerConfig {
    /// Leaves the text untouched; tokenization still strips punctuation.
    pub const fn raw() -> Self {
        Self {
            normalize: false,
            fold_diacritics: false,
            lowercase: false,
            collapse_spaces: false,
        }
    }

    /// Canonical Unicode, lowercased, whitespace cleaned. Diacritics kept.
    pub const fn canonical() -> Self {
        Self {
            normalize: true,
            fold_diacritics: false,
            lowercase: true,
            collapse_spaces: true,
        }
    }

    /// Everything on. Suitable for accent-insensitive lookup keys.
    pub const fn search_key() -> Self {
        Self {
            normalize: true,
            fold_diacritics: true,
            lowercase: true,
            collapse_spaces: true,
        }
    }
}
