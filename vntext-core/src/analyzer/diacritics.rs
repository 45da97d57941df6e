//! Diacritic folding: "Nguyễn Đình Thường" → "Nguyen Dinh Thuong".
//!
//! Folding runs in two steps:
//!
//! 1. Decompose, drop every nonspacing mark (General_Category Mn),
//!    recompose. This removes tone marks and vowel modifiers from any Latin
//!    letter, whatever form the input arrived in. Spacing (Mc) and enclosing
//!    (Me) marks are kept.
//! 2. Map the letters that carry no decomposition to their Latin base
//!    letter. For Vietnamese that is `đ`/`Đ`, plus the look-alike `ð`/`Ð`
//!    (Latin eth) that often stands in for `Đ` in web text.
//!
//! The result contains only plain Latin letters plus whatever non-letter
//! characters the input had. Folding is idempotent.

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Strips diacritics from Vietnamese (and other Latin-script) text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiacriticFolder;

impl DiacriticFolder {
    pub const fn new() -> Self {
        Self
    }

    /// Folds `input` into an existing buffer, clearing it first.
    pub fn fold_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        if input.is_ascii() {
            out.push_str(input);
            return;
        }

        out.extend(
            input
                .nfd()
                .filter(|c| !c.is_mark_nonspacing())
                .nfc()
                .map(fold_char),
        );
    }

    /// Folds `input` and returns a new String.
    #[inline]
    pub fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.fold_into(input, &mut out);
        out
    }
}

/// Maps one precomposed Vietnamese letter to its plain Latin base letter.
///
/// Case is preserved. Anything that is not a Vietnamese diacritic letter is
/// returned unchanged.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c;
    }

    match c {
        'à' | 'á' | 'ã' | 'ạ' | 'ả' | 'ă' | 'ắ' | 'ằ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ấ' | 'ầ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'À' | 'Á' | 'Ã' | 'Ạ' | 'Ả' | 'Ă' | 'Ắ' | 'Ằ' | 'Ẳ' | 'Ẵ' | 'Ặ' | 'Â' | 'Ấ' | 'Ầ' | 'Ẩ'
        | 'Ẫ' | 'Ậ' => 'A',

        'đ' | 'ð' => 'd',
        'Đ' | 'Ð' => 'D',

        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ế' | 'ề' | 'ể' | 'ễ' | 'ệ' => 'e',
        'È' | 'É' | 'Ẹ' | 'Ẻ' | 'Ẽ' | 'Ê' | 'Ế' | 'Ề' | 'Ể' | 'Ễ' | 'Ệ' => 'E',

        'ì' | 'í' | 'ĩ' | 'ỉ' | 'ị' => 'i',
        'Ì' | 'Í' | 'Ĩ' | 'Ỉ' | 'Ị' => 'I',

        'ò' | 'ó' | 'õ' | 'ọ' | 'ỏ' | 'ô' | 'ố' | 'ồ' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ớ' | 'ờ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'Ò' | 'Ó' | 'Õ' | 'Ọ' | 'Ỏ' | 'Ô' | 'Ố' | 'Ồ' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ơ' | 'Ớ' | 'Ờ' | 'Ở'
        | 'Ỡ' | 'Ợ' => 'O',

        'ù' | 'ú' | 'ũ' | 'ụ' | 'ủ' | 'ư' | 'ứ' | 'ừ' | 'ử' | 'ữ' | 'ự' => 'u',
        'Ù' | 'Ú' | 'Ũ' | 'Ụ' | 'Ủ' | 'Ư' | 'Ứ' | 'Ừ' | 'Ử' | 'Ữ' | 'Ự' => 'U',

        'ý' | 'ỳ' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'Ý' | 'Ỳ' | 'Ỵ' | 'Ỷ' | 'Ỹ' => 'Y',

        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{CharClassTable, VIETNAMESE_LOWERCASE};
    use vntext_types::CodepointClass;

    fn fold(input: &str) -> String {
        DiacriticFolder::new().fold(input)
    }

    #[test]
    fn names() {
        assert_eq!(fold("Đào"), "Dao");
        assert_eq!(fold("NGUYỄN NGỌC THUẬN"), "NGUYEN NGOC THUAN");
        assert_eq!(fold("Hải Ðường"), "Hai Duong");
        assert_eq!(fold("office"), "office");
        assert_eq!(fold("đ"), "d");
    }

    #[test]
    fn decomposed_input() {
        // "Việt" as base letters + combining dot below + circumflex
        assert_eq!(fold("Vie\u{0323}\u{0302}t"), "Viet");
        assert_eq!(fold("u\u{031B}\u{0300}"), "u");
    }

    #[test]
    fn punctuation_and_digits_kept() {
        assert_eq!(fold("Giá 2.039,5 USD/ounce!"), "Gia 2.039,5 USD/ounce!");
    }

    #[test]
    fn other_scripts_pass_through() {
        assert_eq!(fold("中文 한글"), "中文 한글");
    }

    #[test]
    fn other_latin_accents_are_stripped() {
        assert_eq!(fold("Café Müller São"), "Cafe Muller Sao");
    }

    #[test]
    fn every_inventory_letter_folds_to_ascii() {
        let table = CharClassTable::new();
        for c in VIETNAMESE_LOWERCASE
            .chars()
            .chain(table.letters(CodepointClass::UpperLetter))
        {
            let s = c.to_string();
            let folded = fold(&s);
            assert!(folded.is_ascii(), "{c} -> {folded}");
            assert_eq!(folded.chars().count(), 1);
            assert_eq!(fold_char(c), folded.chars().next().unwrap_or(c), "{c}");
        }
    }

    #[test]
    fn case_preserved() {
        assert_eq!(fold_char('Ự'), 'U');
        assert_eq!(fold_char('ự'), 'u');
        assert_eq!(fold_char('x'), 'x');
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Có thánh này, chắc chắn \"Sẻ đệ\" (NDB 2.0)",
            "Ðường",
            "e\u{0301}\u{0323}",
            "",
        ];
        for s in samples {
            let once = fold(s);
            assert_eq!(fold(&once), once, "{s:?}");
        }
    }

    #[test]
    fn fold_into_clears_buffer() {
        let mut buf = String::from("stale");
        DiacriticFolder::new().fold_into("Ơn", &mut buf);
        assert_eq!(buf, "On");
    }

    #[test]
    fn spacing_and_enclosing_marks_survive() {
        let f = DiacriticFolder::new();
        // U+093E is Mc, U+20DD is Me
        assert_eq!(f.fold("\u{0915}\u{093E} 1\u{20DD}"), "\u{0915}\u{093E} 1\u{20DD}");
        // Mn on a Devanagari letter still goes
        assert_eq!(f.fold("\u{0915}\u{0941}"), "\u{0915}");
        assert_eq!(f.fold("Thu\u{031B}o\u{031B}\u{0300}ng 1\u{20DD}"), "Thuong 1\u{20DD}");
    }
}
