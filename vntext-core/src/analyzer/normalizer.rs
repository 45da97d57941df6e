//! Unicode canonicalization and lowercasing.
//!
//! The same visible text can arrive in several byte forms. An "ế" may be a
//! single precomposed code point (U+1EBF), an "ê" followed by a combining
//! acute (U+00EA U+0301), or a bare "e" followed by two combining marks.
//! [`TextNormalizer`] maps all of them to one representation so that later
//! stages compare, hash and count them as equal.
//!
//! ## Known gap: tone-mark position
//!
//! Vietnamese has two conventions for where the tone mark sits in a vowel
//! cluster: old style `òa óa ỏa õa ọa` and new style `oà oá oả oã oạ`. These
//! are different code point sequences, not Unicode-equivalent ones, so
//! normalization keeps them distinct. Reconciling them needs orthographic
//! rules, not Unicode tables, and is not attempted here.

use unicode_normalization::{is_nfc_quick, is_nfkc_quick, IsNormalized, UnicodeNormalization};

/// Target normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical decomposition, then canonical composition.
    Nfc,
    /// Compatibility decomposition, then canonical composition.
    /// Also folds full-width forms, ligatures and similar presentation variants.
    #[default]
    Nfkc,
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizerConfig {
    pub form: NormalizationForm,
}

/// Canonicalizes text to a single Unicode representation.
///
/// Any two canonically equivalent inputs produce byte-identical output, and
/// normalizing twice is the same as normalizing once.
///
/// # Examples
///
/// ```
/// use vntext_core::analyzer::TextNormalizer;
///
/// let n = TextNormalizer::default();
/// // precomposed vs. base letter + combining marks
/// assert_eq!(n.normalize("Vi\u{1EC7}t"), n.normalize("Vie\u{0323}\u{0302}t"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing. Already-normalized input is copied
    /// through without running the decomposition.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        match self.config.form {
            NormalizationForm::Nfc => {
                if is_nfc_quick(input.chars()) == IsNormalized::Yes {
                    out.push_str(input);
                } else {
                    out.extend(input.nfc());
                }
            }
            NormalizationForm::Nfkc => {
                if is_nfkc_quick(input.chars()) == IsNormalized::Yes {
                    out.push_str(input);
                } else {
                    out.extend(input.nfkc());
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Unicode-aware lowercasing into a reusable buffer.
///
/// ASCII runs are copied a byte range at a time; everything else goes through
/// [`char::to_lowercase`], which covers every Vietnamese capital including
/// `Đ`, `Ơ`, `Ư` and all toned vowels.
pub fn lowercase_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let start = i;
        while i < bytes.len() && bytes[i] < 128 && !bytes[i].is_ascii_uppercase() {
            i += 1;
        }
        out.push_str(&input[start..i]);

        if i == bytes.len() {
            break;
        }

        if bytes[i].is_ascii_uppercase() {
            out.push(bytes[i].to_ascii_lowercase() as char);
            i += 1;
            continue;
        }

        // `i` sits on a non-ASCII lead byte, so it is a char boundary.
        if let Some(ch) = input[i..].chars().next() {
            out.extend(ch.to_lowercase());
            i += ch.len_utf8();
        }
    }
}

/// Lowercases text and returns a new String.
#[inline]
pub fn lowercase(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    lowercase_into(input, &mut out);
    out
}
