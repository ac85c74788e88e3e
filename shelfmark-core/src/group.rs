//! Derive the distinct series of a book collection and their members

use crate::types::{Book, Series, SeriesId};
use std::collections::HashMap;

/// Distinct series of a scope, with the books belonging to each
///
/// Series are kept in first-seen order and addressed by their index in that
/// order. Members are indices into the book slice the group was extracted
/// from, in encounter order.
#[derive(Debug, Clone, Default)]
pub struct EntityGroup {
    series: Vec<Series>,
    members: Vec<Vec<usize>>,
    index: HashMap<SeriesId, usize>,
    ungrouped: usize,
}

/// Single pass over `books`, collecting each series on first sight
///
/// Books without a series are not grouped; they are only counted.
pub fn extract_groups(books: &[Book]) -> EntityGroup {
    let mut group = EntityGroup::default();
    for (book_idx, book) in books.iter().enumerate() {
        let Some(series) = &book.series else {
            group.ungrouped += 1;
            continue;
        };
        let slot = match group.index.get(&series.id) {
            Some(&slot) => slot,
            None => {
                let slot = group.series.len();
                group.series.push(series.clone());
                group.members.push(Vec::new());
                group.index.insert(series.id, slot);
                slot
            }
        };
        group.members[slot].push(book_idx);
    }
    tracing::debug!(
        series = group.series.len(),
        ungrouped = group.ungrouped,
        "Extracted series groups"
    );
    group
}

impl EntityGroup {
    /// Register a series no book of the scope refers to, returning its slot
    ///
    /// A series that is already present keeps its slot and members.
    pub(crate) fn insert_series(&mut self, series: &Series) -> usize {
        if let Some(slot) = self.slot_of(series.id) {
            return slot;
        }
        let slot = self.series.len();
        self.series.push(series.clone());
        self.members.push(Vec::new());
        self.index.insert(series.id, slot);
        slot
    }

    /// Series in first-seen order
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn slot_of(&self, id: SeriesId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Book indices of the series at `slot`
    pub fn members(&self, slot: usize) -> &[usize] {
        self.members.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Book indices of a series, if the series is part of this group
    pub fn members_of(&self, id: SeriesId) -> Option<&[usize]> {
        self.slot_of(id).map(|slot| self.members(slot))
    }

    /// Number of books skipped because they have no series
    pub fn ungrouped(&self) -> usize {
        self.ungrouped
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u64, series: Option<(u64, &str)>) -> Book {
        let book = Book::new(id, format!("Book {}", id), "en");
        match series {
            Some((sid, name)) => book.in_series(Series::new(sid, name), None),
            None => book,
        }
    }

    #[test]
    fn test_series_kept_in_first_seen_order() {
        let books = vec![
            book(1, Some((20, "Zeta"))),
            book(2, Some((10, "Alpha"))),
            book(3, Some((20, "Zeta"))),
            book(4, Some((30, "Mid"))),
        ];
        let group = extract_groups(&books);

        let ids: Vec<u64> = group.series().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![20, 10, 30]);
        assert_eq!(group.members_of(SeriesId(20)), Some(&[0, 2][..]));
        assert_eq!(group.members_of(SeriesId(10)), Some(&[1][..]));
    }

    #[test]
    fn test_books_without_series_are_excluded() {
        let books = vec![book(1, None), book(2, Some((5, "Only"))), book(3, None)];
        let group = extract_groups(&books);

        assert_eq!(group.len(), 1);
        assert_eq!(group.ungrouped(), 2);
        assert_eq!(group.members(0), &[1]);
    }

    #[test]
    fn test_inserted_series_has_no_members() {
        let books = vec![book(1, Some((5, "Known")))];
        let mut group = extract_groups(&books);

        assert_eq!(group.insert_series(&Series::new(5, "Known")), 0);
        let slot = group.insert_series(&Series::new(6, "Unknown"));
        assert_eq!(slot, 1);
        assert!(group.members(slot).is_empty());
        assert_eq!(group.members(0), &[0]);
    }

    #[test]
    fn test_empty_input() {
        let group = extract_groups(&[]);
        assert!(group.is_empty());
        assert_eq!(group.members(0), &[] as &[usize]);
        assert_eq!(group.members_of(SeriesId(1)), None);
    }
}
