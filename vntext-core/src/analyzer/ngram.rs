//! Word n-gram extraction.
//!
//! An n-gram is a window of `n` consecutive words joined with a single
//! space. For a word list of length `L`, exactly `L - n + 1` windows exist
//! when `1 <= n <= L`, and none otherwise. Windows are counted into a
//! frequency map keyed by the joined string.

use rustc_hash::FxHashMap;

use crate::analyzer::normalizer::lowercase;
use crate::analyzer::tokenizer::Tokenizer;
use crate::charset::CharClassTable;

/// Frequency of each distinct n-gram.
pub type NGramCounts = FxHashMap<String, usize>;

/// Number of windows of size `n` over `len` words.
///
/// Returns 0 when `n` is 0 or larger than `len`.
#[inline(always)]
pub const fn window_count(len: usize, n: usize) -> usize {
    if n == 0 || n > len {
        0
    } else {
        len - n + 1
    }
}

/// Calls `callback` with each joined window, left to right.
///
/// The joined string lives in one buffer that is reused between calls.
pub fn for_each_window<S, F>(words: &[S], n: usize, mut callback: F)
where
    S: AsRef<str>,
    F: FnMut(&str),
{
    if window_count(words.len(), n) == 0 {
        return;
    }

    let mut buf = String::new();
    for window in words.windows(n) {
        buf.clear();
        for (i, word) in window.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            buf.push_str(word.as_ref());
        }
        callback(&buf);
    }
}

/// Counts every window of `n` consecutive words.
///
/// ```
/// use vntext_core::analyzer::ngram::words_to_ngrams;
///
/// let grams = words_to_ngrams(&["a", "b", "a", "b"], 2);
/// assert_eq!(grams["a b"], 2);
/// assert_eq!(grams["b a"], 1);
/// ```
pub fn words_to_ngrams<S: AsRef<str>>(words: &[S], n: usize) -> NGramCounts {
    let mut counts = NGramCounts::default();
    for_each_window(words, n, |gram| match counts.get_mut(gram) {
        Some(count) => *count += 1,
        None => {
            counts.insert(gram.to_owned(), 1);
        }
    });
    counts
}

/// Lowercases `text`, tokenizes it, and counts its word n-grams.
pub fn text_to_ngrams(table: &CharClassTable, text: &str, n: usize) -> NGramCounts {
    let lowered = lowercase(text);
    let words = Tokenizer::new(table).words(&lowered);
    words_to_ngrams(&words, n)
}

/// Trait for types that turn a word sequence into n-gram counts.
///
/// This allows alternative windowing strategies (skip-grams, ranges of `n`)
/// behind the same call sites.
pub trait NGramExtractor {
    /// Counts the n-grams of `words`.
    fn extract<S: AsRef<str>>(&self, words: &[S]) -> NGramCounts;
}

/// Fixed-size contiguous windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGramBuilder {
    n: usize,
}

impl NGramBuilder {
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    pub const fn bigram() -> Self {
        Self::new(2)
    }

    pub const fn trigram() -> Self {
        Self::new(3)
    }

    /// The window size.
    #[inline(always)]
    pub const fn n(&self) -> usize {
        self.n
    }
}

impl NGramExtractor for NGramBuilder {
    #[inline]
    fn extract<S: AsRef<str>>(&self, words: &[S]) -> NGramCounts {
        words_to_ngrams(words, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(counts: &NGramCounts) -> Vec<(&str, usize)> {
        let mut v: Vec<_> = counts.iter().map(|(k, &c)| (k.as_str(), c)).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn bigrams_of_three_words() {
        let table = CharClassTable::new();
        let grams = text_to_ngrams(&table, "a b c", 2);
        assert_eq!(sorted(&grams), [("a b", 1), ("b c", 1)]);
    }

    #[test]
    fn window_count_basic() {
        assert_eq!(window_count(5, 1), 5);
        assert_eq!(window_count(5, 3), 3);
        assert_eq!(window_count(5, 5), 1);
        assert_eq!(window_count(5, 6), 0);
        assert_eq!(window_count(5, 0), 0);
        assert_eq!(window_count(0, 1), 0);
    }

    #[test]
    fn total_windows_match_count() {
        let words = ["x", "y", "x", "y", "x", "z"];
        for n in 0..=words.len() + 1 {
            let grams = words_to_ngrams(&words, n);
            let total: usize = grams.values().sum();
            assert_eq!(total, window_count(words.len(), n), "n={n}");
        }
    }

    #[test]
    fn repeated_windows_are_counted() {
        let grams = words_to_ngrams(&["la", "la", "la"], 2);
        assert_eq!(sorted(&grams), [("la la", 2)]);
    }

    #[test]
    fn zero_and_oversized_n_are_empty() {
        assert!(words_to_ngrams(&["a", "b"], 0).is_empty());
        assert!(words_to_ngrams(&["a", "b"], 3).is_empty());
        assert!(words_to_ngrams::<&str>(&[], 1).is_empty());
    }

    #[test]
    fn unigrams_are_word_frequencies() {
        let grams = words_to_ngrams(&["a", "b", "a"], 1);
        assert_eq!(sorted(&grams), [("a", 2), ("b", 1)]);
    }

    #[test]
    fn owned_words_accepted() {
        let words = vec![String::from("xin"), String::from("chào")];
        let grams = words_to_ngrams(&words, 2);
        assert_eq!(grams["xin chào"], 1);
    }

    #[test]
    fn for_each_window_order() {
        let mut seen = Vec::new();
        for_each_window(&["a", "b", "c", "d"], 3, |g| seen.push(g.to_owned()));
        assert_eq!(seen, ["a b c", "b c d"]);
    }

    #[test]
    fn text_is_lowercased_before_tokenizing() {
        let table = CharClassTable::new();
        let grams = text_to_ngrams(&table, "ĐƯỜNG Phố, đường phố!", 2);
        assert_eq!(sorted(&grams), [("phố đường", 1), ("đường phố", 2)]);
    }

    #[test]
    fn reference_paragraph_trigrams() {
        let table = CharClassTable::new();
        let text = "Có thánh này, chắc chắn \"Sẻ đệ\" (NDB 2.0) sẽ thêm sức mạnh để đả bại Sơ Luyến.
Trực tiếp ngay bây giờ trên http://www.gametv1.vn. ______ Ahihi";
        let grams = text_to_ngrams(&table, text, 3);

        let mut expected = vec![
            "2.0 sẽ thêm",
            "bây giờ trên",
            "bại sơ luyến",
            "chắc chắn sẻ",
            "chắn sẻ đệ",
            "có thánh này",
            "giờ trên http://www.gametv1.vn",
            "luyến trực tiếp",
            "mạnh để đả",
            "ndb 2.0 sẽ",
            "ngay bây giờ",
            "này chắc chắn",
            "sơ luyến trực",
            "sẻ đệ ndb",
            "sẽ thêm sức",
            "sức mạnh để",
            "thánh này chắc",
            "thêm sức mạnh",
            "tiếp ngay bây",
            "trên http://www.gametv1.vn ahihi",
            "trực tiếp ngay",
            "đả bại sơ",
            "để đả bại",
            "đệ ndb 2.0",
        ];
        expected.sort_unstable();

        assert_eq!(grams.len(), 24);
        let got: Vec<&str> = sorted(&grams).into_iter().map(|(k, _)| k).collect();
        assert_eq!(got, expected);
        assert!(grams.values().all(|&c| c == 1));
    }

    #[test]
    fn builder_and_trait() {
        let b = NGramBuilder::bigram();
        assert_eq!(b.n(), 2);
        assert_eq!(NGramBuilder::trigram().n(), 3);
        let grams = b.extract(&["một", "hai", "ba"]);
        assert_eq!(grams.len(), 2);
        assert_eq!(grams["một hai"], 1);
    }
}
