//! Bucket an ordered entity list by the leading letters of its sort keys

use crate::sort::{CollationKey, Collator};
use std::collections::HashMap;

/// Bucket key for titles that do not start with a letter
pub const OTHER_KEY: &str = "_";

/// Entities sharing a sort-key prefix, in their original relative order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBucket<T> {
    pub key: String,
    pub members: Vec<T>,
}

/// Bucket key of a sort key: its first `prefix_len` characters, folded to
/// their base letters and upper-cased
///
/// Keys that are empty or do not start with a letter go to [`OTHER_KEY`].
pub fn bucket_key(sort_key: &str, prefix_len: usize, collator: &Collator) -> String {
    match sort_key.chars().next() {
        Some(first) if first.is_alphabetic() => sort_key
            .chars()
            .take(prefix_len.max(1))
            .flat_map(|c| collator.fold(c))
            .flat_map(char::to_uppercase)
            .collect(),
        _ => OTHER_KEY.to_string(),
    }
}

/// Display form of a bucket key: `AB` is shown as `Ab`
pub fn display_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Split `ordered` into buckets keyed by sort-key prefix
///
/// Buckets come back ordered by `collator`, so that for input sorted by the
/// same collator their concatenation is the input itself. [`OTHER_KEY`]
/// collates before every letter. Empty input gives no buckets.
pub fn split_by_letter<'k, T, F>(
    ordered: &[T],
    prefix_len: usize,
    collator: &Collator,
    sort_key: F,
) -> Vec<LetterBucket<T>>
where
    T: Clone,
    F: Fn(&T) -> &'k str,
{
    let mut buckets: Vec<(CollationKey, LetterBucket<T>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for item in ordered {
        let key = bucket_key(sort_key(item), prefix_len, collator);
        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                slots.insert(key.clone(), buckets.len());
                buckets.push((
                    collator.key(&key),
                    LetterBucket {
                        key,
                        members: Vec::new(),
                    },
                ));
                buckets.len() - 1
            }
        };
        buckets[slot].1.members.push(item.clone());
    }
    buckets.sort_by(|a, b| a.0.cmp(&b.0));
    buckets.into_iter().map(|(_, bucket)| bucket).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Collator {
        Collator::new("en")
    }

    #[test]
    fn test_bucket_key() {
        let collator = english();
        assert_eq!(bucket_key("HOBBIT", 1, &collator), "H");
        assert_eq!(bucket_key("HOBBIT", 2, &collator), "HO");
        assert_eq!(bucket_key("H", 3, &collator), "H");
        assert_eq!(bucket_key("1984", 1, &collator), OTHER_KEY);
        assert_eq!(bucket_key("", 1, &collator), OTHER_KEY);
        assert_eq!(bucket_key("ÉTÉ", 1, &collator), "E");
        assert_eq!(bucket_key("ÅSA", 1, &Collator::new("sv")), "Å");
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("A"), "A");
        assert_eq!(display_key("AB"), "Ab");
        assert_eq!(display_key("_"), "_");
    }

    #[test]
    fn test_split_preserves_order_within_bucket() {
        let keys = ["42", "BAR", "BAZ", "BOO", "FOO", "ZOO"];
        let buckets = split_by_letter(&keys, 1, &english(), |k| *k);
        let summary: Vec<(&str, Vec<&str>)> = buckets
            .iter()
            .map(|b| (b.key.as_str(), b.members.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("_", vec!["42"]),
                ("B", vec!["BAR", "BAZ", "BOO"]),
                ("F", vec!["FOO"]),
                ("Z", vec!["ZOO"]),
            ]
        );
    }

    #[test]
    fn test_accented_initials_join_base_letter() {
        let keys = ["DUNE", "ÉCLIPSE", "EDEN", "FOUNDATION"];
        let buckets = split_by_letter(&keys, 1, &Collator::new("fr"), |k| *k);
        let keys: Vec<&str> = buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["D", "E", "F"]);
        assert_eq!(buckets[1].members, vec!["ÉCLIPSE", "EDEN"]);
    }

    #[test]
    fn test_after_z_letters_follow_collation() {
        let keys = ["ZEBRA", "ÅSA", "ÄPPLE", "ÖGA"];
        let buckets = split_by_letter(&keys, 1, &Collator::new("sv"), |k| *k);
        let keys: Vec<&str> = buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["Z", "Å", "Ä", "Ö"]);
    }

    #[test]
    fn test_split_empty_input() {
        let empty: [&str; 0] = [];
        let buckets = split_by_letter(&empty, 1, &english(), |k| *k);
        assert!(buckets.is_empty());
    }
}
