//! Code point classification for the Vietnamese alphabet.
//!
//! The table is built once from a fixed inventory (ASCII digits plus every
//! Vietnamese lowercase letter, tone marks included) and derives each
//! uppercase form from its lowercase twin. After construction it is never
//! mutated, so a single instance can be shared by reference across threads.
//!
//! ```
//! use vntext_core::charset::CharClassTable;
//!
//! let table = CharClassTable::new();
//! assert!(table.is_alphanumeric('ữ'));
//! assert!(table.is_alphanumeric('Ữ'));
//! assert!(!table.is_alphanumeric('.'));
//! ```

use rustc_hash::FxHashMap;
use vntext_types::{Alphabet, CodepointClass};

/// ASCII digits, in order.
pub const DIGITS: &str = "0123456789";

/// Every Vietnamese lowercase letter: the Latin base letters plus all
/// vowel-modifier and tone-mark combinations, precomposed (NFC).
#[rustfmt::skip]
pub const VIETNAMESE_LOWERCASE: &str = concat!(
    "aàáãạảăắằẳẵặâấầẩẫậ",
    "bcdđ",
    "eèéẹẻẽêếềểễệ",
    "fgh",
    "iìíĩỉị",
    "jklmn",
    "oòóõọỏôốồổỗộơớờởỡợ",
    "pqrst",
    "uùúũụủưứừửữự",
    "vwx",
    "yýỳỵỷỹ",
    "z",
);

/// Frozen code point classification table.
///
/// Membership is exact: only code points from the fixed inventory are
/// alphanumeric. Letters from other scripts (CJK, Cyrillic, ...) are not
/// members, which is what makes the tokenizer strip them from word edges.
#[derive(Debug, Clone)]
pub struct CharClassTable {
    classes: FxHashMap<char, CodepointClass>,
    upper_to_lower: FxHashMap<char, char>,
    alphabet: Alphabet,
}

impl Default for CharClassTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CharClassTable {
    /// Builds the table for digits and the Vietnamese letter inventory.
    pub fn new() -> Self {
        let letters = VIETNAMESE_LOWERCASE.chars().count();
        let mut classes =
            FxHashMap::with_capacity_and_hasher(DIGITS.len() + 2 * letters, Default::default());
        let mut upper_to_lower = FxHashMap::with_capacity_and_hasher(letters, Default::default());
        let mut symbols = Vec::with_capacity(DIGITS.len() + 2 * letters);

        for c in DIGITS.chars() {
            classes.insert(c, CodepointClass::Numeric);
            symbols.push(c);
        }

        for lower in VIETNAMESE_LOWERCASE.chars() {
            let upper = single_upper(lower);
            classes.insert(lower, CodepointClass::LowerLetter);
            classes.insert(upper, CodepointClass::UpperLetter);
            upper_to_lower.insert(upper, lower);
            symbols.push(lower);
            symbols.push(upper);
        }

        symbols.sort_unstable();

        Self {
            classes,
            upper_to_lower,
            alphabet: Alphabet::new(symbols),
        }
    }

    /// Returns the class of `c`, or `None` if it is outside the inventory.
    #[inline]
    pub fn class_of(&self, c: char) -> Option<CodepointClass> {
        self.classes.get(&c).copied()
    }

    /// True for digits and every letter of the inventory, either case.
    #[inline(always)]
    pub fn is_alphanumeric(&self, c: char) -> bool {
        if c.is_ascii() {
            // Every ASCII letter and digit is part of the inventory.
            return c.is_ascii_alphanumeric();
        }
        self.classes.contains_key(&c)
    }

    /// True for `0`..=`9`.
    #[inline(always)]
    pub fn is_numeric(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    #[inline]
    pub fn is_lower(&self, c: char) -> bool {
        self.class_of(c) == Some(CodepointClass::LowerLetter)
    }

    #[inline]
    pub fn is_upper(&self, c: char) -> bool {
        self.class_of(c) == Some(CodepointClass::UpperLetter)
    }

    /// Maps an uppercase inventory letter to its lowercase twin.
    ///
    /// Code points outside the inventory are returned unchanged.
    #[inline]
    pub fn to_lower(&self, c: char) -> char {
        self.upper_to_lower.get(&c).copied().unwrap_or(c)
    }

    /// Digits and both cases of every letter, sorted by code point.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Iterates the letters of one case, in inventory order.
    pub fn letters(&self, class: CodepointClass) -> impl Iterator<Item = char> + '_ {
        VIETNAMESE_LOWERCASE.chars().filter_map(move |lower| match class {
            CodepointClass::LowerLetter => Some(lower),
            CodepointClass::UpperLetter => Some(single_upper(lower)),
            CodepointClass::Numeric => None,
        })
    }

    /// Number of alphanumeric code points in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Uppercases a letter that is known to map to exactly one code point.
///
/// All inventory letters do; anything else falls back to itself.
fn single_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
