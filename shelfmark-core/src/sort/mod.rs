//! Title ordering: noise-word stripping and locale collation
//!
//! Everything here is a pure function of its inputs. The rules (noise-word
//! language and collation locale) are passed explicitly as [`SortRules`].

mod collate;
mod noise;

pub use collate::{CollationKey, Collator};
pub use noise::NoiseWords;

use std::cmp::Ordering;

/// The rule set used to order titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRules {
    pub noise: NoiseWords,
    pub collator: Collator,
}

impl SortRules {
    /// Noise words of `language`, collation of `locale`
    pub fn new(language: &str, locale: &str) -> Self {
        Self {
            noise: NoiseWords::for_language(language),
            collator: Collator::new(locale),
        }
    }
}

/// Noise-word stripped, upper-cased form of a title
///
/// An absent title is the empty string.
pub fn sort_key(title: Option<&str>, rules: &SortRules) -> String {
    let upper = title.unwrap_or_default().trim().to_uppercase();
    rules.noise.strip_leading(&upper).to_string()
}

/// Compare two titles under the given rules
pub fn compare_titles(a: Option<&str>, b: Option<&str>, rules: &SortRules) -> Ordering {
    rules
        .collator
        .compare(&sort_key(a, rules), &sort_key(b, rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> SortRules {
        SortRules::new("en", "en")
    }

    #[test]
    fn test_sort_key_strips_and_uppercases() {
        assert_eq!(sort_key(Some("The Hobbit"), &english()), "HOBBIT");
        assert_eq!(sort_key(Some("  a tale "), &english()), "TALE");
        assert_eq!(sort_key(None, &english()), "");
    }

    #[test]
    fn test_compare_ignores_articles() {
        let rules = english();
        assert_eq!(
            compare_titles(Some("The Zoo"), Some("Foo"), &rules),
            Ordering::Greater
        );
        assert_eq!(
            compare_titles(Some("Bar"), Some("A Foo"), &rules),
            Ordering::Less
        );
    }

    #[test]
    fn test_absent_title_sorts_first() {
        let rules = english();
        assert_eq!(compare_titles(None, Some("Aardvark"), &rules), Ordering::Less);
        assert_eq!(compare_titles(None, None, &rules), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive() {
        let rules = english();
        assert_eq!(
            compare_titles(Some("dune"), Some("DUNE"), &rules),
            Ordering::Equal
        );
    }
}
