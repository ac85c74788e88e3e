//! Locale collation for sort keys

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters some locales order after `Z` instead of folding them to a base letter
const SWEDISH: &[char] = &['Å', 'Ä', 'Ö'];
const DANO_NORWEGIAN: &[char] = &['Æ', 'Ø', 'Å'];
const FINNISH: &[char] = &['Å', 'Ä', 'Ö'];

/// Offset lifting letter weights above every non-letter
const LETTER_WEIGHT: u32 = 0x0011_0000;

/// Comparable form of a sort key
///
/// Ordered by accent-folded weights first, then by the exact text, which
/// makes the order total: two keys are equal only when the texts are.
/// Spaces, punctuation and digits weigh less than any letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    text: String,
}

/// Locale-aware string comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collator {
    after_z: &'static [char],
}

impl Collator {
    pub fn new(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let after_z = match primary.as_str() {
            "sv" => SWEDISH,
            "da" | "nb" | "nn" | "no" => DANO_NORWEGIAN,
            "fi" => FINNISH,
            _ => &[],
        };
        Self { after_z }
    }

    /// Base letters of `c`: accents are dropped, except on the locale's
    /// letters that sort after `Z`
    pub fn fold(&self, c: char) -> impl Iterator<Item = char> + '_ {
        let kept = self.after_z.contains(&c);
        std::iter::once(c)
            .nfkd()
            .filter(move |d| !kept && !is_combining_mark(*d))
            .chain(kept.then_some(c))
    }

    fn weight(&self, c: char) -> u32 {
        match self.after_z.iter().position(|&t| t == c) {
            Some(pos) => LETTER_WEIGHT + 'Z' as u32 + 1 + pos as u32,
            None if c.is_alphabetic() => LETTER_WEIGHT + c as u32,
            None => c as u32,
        }
    }

    /// Build the comparable form of a string
    pub fn key(&self, text: &str) -> CollationKey {
        let primary = text
            .chars()
            .flat_map(|c| self.fold(c))
            .map(|c| self.weight(c))
            .collect();
        CollationKey {
            primary,
            text: text.to_string(),
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_fold_to_base_letter() {
        let collator = Collator::new("fr");
        assert_eq!(collator.compare("ÉTÉ", "ETZ"), Ordering::Less);
        assert_eq!(collator.compare("ÉCOLE", "ECOLE"), Ordering::Greater);
        assert_eq!(collator.compare("ÉCOLE", "ÉCOLE"), Ordering::Equal);
    }

    #[test]
    fn test_swedish_letters_after_z() {
        let collator = Collator::new("sv-SE");
        assert_eq!(collator.compare("ÖL", "ZEBRA"), Ordering::Greater);
        assert_eq!(Collator::new("en").compare("ÖL", "ZEBRA"), Ordering::Less);
        assert_eq!(collator.compare("ÅSA", "ÄPPLE"), Ordering::Less);
    }

    #[test]
    fn test_fold_keeps_after_z_letters() {
        let swedish = Collator::new("sv");
        assert_eq!(swedish.fold('Å').collect::<String>(), "Å");
        assert_eq!(swedish.fold('É').collect::<String>(), "E");
        assert_eq!(Collator::new("en").fold('Å').collect::<String>(), "A");
    }

    #[test]
    fn test_non_letters_before_letters() {
        let collator = Collator::new("en");
        assert_eq!(collator.compare("1984", "ANIMAL"), Ordering::Less);
        assert_eq!(collator.compare("[BRACKETS]", "ANIMAL"), Ordering::Less);
        assert_eq!(collator.compare("A B", "AB"), Ordering::Less);
    }
}
