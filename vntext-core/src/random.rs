//! Random word and identifier generation.
//!
//! Words are sampled code point by code point, with replacement, from a
//! caller-chosen [`Alphabet`]. Every alphabet entry is equally likely, so a
//! symbol listed twice is drawn twice as often. This is deliberate and lets
//! callers weight symbols without a separate weight table.
//!
//! Generators are explicit values. A [`WordGenerator`] owns its RNG and needs
//! `&mut self`; wrap it in a [`SharedWordGenerator`] to share one stream
//! between threads. The RNG is not cryptographic.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use vntext_types::{Alphabet, Result, TextError};

/// Samples random words from an alphabet.
#[derive(Debug, Clone)]
pub struct WordGenerator<R = StdRng> {
    rng: R,
}

impl WordGenerator<StdRng> {
    /// Seeds a generator from the current time in nanoseconds.
    pub fn from_time_seed() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        debug!(seed, "seeded word generator from clock");
        Self::seeded(seed)
    }

    /// Seeds a generator with a fixed value, for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WordGenerator<StdRng> {
    fn default() -> Self {
        Self::from_time_seed()
    }
}

impl<R: Rng> WordGenerator<R> {
    /// Wraps an existing RNG.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a word whose length is drawn uniformly from `[min_len, max_len]`.
    ///
    /// A `max_len` below `min_len` is raised to `min_len`, so
    /// `generate(8, 3, ..)` always yields 8 code points.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidArgument`] if `alphabet` is empty.
    pub fn generate(
        &mut self,
        min_len: usize,
        max_len: usize,
        alphabet: &Alphabet,
    ) -> Result<String> {
        if alphabet.is_empty() {
            return Err(TextError::invalid_argument(
                "cannot sample from an empty alphabet",
            ));
        }

        let max_len = max_len.max(min_len);
        let len = self.rng.random_range(min_len..=max_len);
        let mut word = String::with_capacity(len);
        for _ in 0..len {
            word.push(self.draw(alphabet));
        }
        Ok(word)
    }

    /// Generates an ASCII identifier of exactly `length` characters.
    ///
    /// The first character is a letter, so the result never starts with a
    /// digit; the rest are letters or digits. `length == 0` gives `""`.
    pub fn generate_identifier(&mut self, length: usize) -> String {
        let mut ident = String::with_capacity(length);
        if length == 0 {
            return ident;
        }

        let head = Alphabet::ascii_letters();
        let tail = Alphabet::ascii_alphanumeric();

        ident.push(self.draw(&head));
        for _ in 1..length {
            ident.push(self.draw(&tail));
        }
        ident
    }

    /// One uniform draw. `alphabet` must not be empty.
    #[inline]
    fn draw(&mut self, alphabet: &Alphabet) -> char {
        let symbols = alphabet.as_slice();
        symbols[self.rng.random_range(0..symbols.len())]
    }
}

/// A [`WordGenerator`] behind a mutex, shareable across threads.
#[derive(Debug)]
pub struct SharedWordGenerator {
    inner: Mutex<WordGenerator<StdRng>>,
}

impl Default for SharedWordGenerator {
    fn default() -> Self {
        Self::new(WordGenerator::from_time_seed())
    }
}

impl SharedWordGenerator {
    pub fn new(generator: WordGenerator<StdRng>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    /// See [`WordGenerator::generate`].
    pub fn generate(
        &self,
        min_len: usize,
        max_len: usize,
        alphabet: &Alphabet,
    ) -> Result<String> {
        self.inner.lock().generate(min_len, max_len, alphabet)
    }

    /// See [`WordGenerator::generate_identifier`].
    pub fn generate_identifier(&self, length: usize) -> String {
        self.inner.lock().generate_identifier(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharClassTable;
    use std::sync::Arc;

    #[test]
    fn lengths_stay_in_bounds() {
        let table = CharClassTable::new();
        let alphabet = table.alphabet();
        let mut g = WordGenerator::seeded(1);

        for _ in 0..1000 {
            let word = g.generate(3, 9, alphabet).expect("non-empty alphabet");
            let n = word.chars().count();
            assert!((3..=9).contains(&n), "len {n}");
            assert!(word.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn single_symbol_fixed_length() {
        let mut g = WordGenerator::seeded(2);
        let a = Alphabet::from_str_chars("a");
        for _ in 0..100 {
            assert_eq!(g.generate(8, 8, &a).expect("non-empty"), "aaaaaaaa");
        }
    }

    #[test]
    fn max_below_min_is_raised() {
        let mut g = WordGenerator::seeded(3);
        let a = Alphabet::ascii_letters();
        for _ in 0..50 {
            assert_eq!(g.generate(5, 1, &a).expect("non-empty").chars().count(), 5);
        }
    }

    #[test]
    fn zero_length() {
        let mut g = WordGenerator::seeded(4);
        assert_eq!(g.generate(0, 0, &Alphabet::ascii_letters()).expect("non-empty"), "");
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let mut g = WordGenerator::seeded(5);
        let err = g.generate(1, 3, &Alphabet::new([])).unwrap_err();
        assert!(matches!(err, TextError::InvalidArgument { .. }));

        // even when the drawn length would be zero
        assert!(g.generate(0, 0, &Alphabet::new([])).is_err());
    }

    #[test]
    fn duplicates_bias_sampling() {
        let mut g = WordGenerator::seeded(6);
        let a = Alphabet::from_str_chars("aaab");
        let word = g.generate(4000, 4000, &a).expect("non-empty");
        let count_a = word.chars().filter(|&c| c == 'a').count();
        // expected 3000; allow generous slack
        assert!((2700..=3300).contains(&count_a), "a drawn {count_a} times");
    }

    #[test]
    fn same_seed_same_stream() {
        let a = Alphabet::ascii_alphanumeric();
        let mut g1 = WordGenerator::seeded(42);
        let mut g2 = WordGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                g1.generate(4, 12, &a).expect("non-empty"),
                g2.generate(4, 12, &a).expect("non-empty")
            );
        }
    }

    #[test]
    fn identifiers_start_with_letter() {
        let mut g = WordGenerator::seeded(8);
        let letters = Alphabet::ascii_letters();
        let alnum = Alphabet::ascii_alphanumeric();
        for _ in 0..500 {
            let id = g.generate_identifier(8);
            assert_eq!(id.len(), 8);
            assert!(id.chars().next().is_some_and(|c| letters.contains(c)));
            assert!(id.chars().all(|c| alnum.contains(c)));
        }
        assert_eq!(g.generate_identifier(0), "");
        assert_eq!(g.generate_identifier(1).len(), 1);
    }

    #[test]
    fn time_seeded_generator_works() {
        let mut g = WordGenerator::from_time_seed();
        let word = g.generate(8, 12, &Alphabet::ascii_alphanumeric()).expect("non-empty");
        assert!((8..=12).contains(&word.len()));
    }

    #[test]
    fn shared_generator_across_threads() {
        let shared = Arc::new(SharedWordGenerator::new(WordGenerator::seeded(9)));
        let alphabet = Arc::new(Alphabet::ascii_letters());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                let alphabet = Arc::clone(&alphabet);
                std::thread::spawn(move || {
                    (0..250)
                        .map(|_| shared.generate(2, 6, &alphabet))
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();

        for h in handles {
            let words = h.join().expect("thread panicked").expect("non-empty alphabet");
            assert_eq!(words.len(), 250);
            assert!(words.iter().all(|w| (2..=6).contains(&w.len())));
        }

        assert_eq!(shared.generate_identifier(5).len(), 5);
    }
}
