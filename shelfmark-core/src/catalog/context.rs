//! Per-build derived data, computed once and read-only afterwards

use crate::group::{extract_groups, EntityGroup};
use crate::sort::{sort_key, CollationKey, SortRules};
use crate::types::{Book, Series, SeriesId};
use std::collections::HashSet;

/// Everything a build derives from the book collection
///
/// Series are addressed by their slot in the [`EntityGroup`]; `ordered`
/// lists the slots in display order.
#[derive(Debug)]
pub struct BuildContext<'a> {
    books: &'a [Book],
    group: EntityGroup,
    rules: SortRules,
    sort_keys: Vec<String>,
    ordered: Vec<usize>,
}

impl<'a> BuildContext<'a> {
    /// Group and order the series of `books`
    ///
    /// Noise words follow the language of the first book; collation follows
    /// `locale`.
    pub fn new(books: &'a [Book], locale: &str) -> Self {
        let group = extract_groups(books);
        let language = books.first().map_or(locale, |book| book.language.as_str());
        let rules = SortRules::new(language, locale);

        let sort_keys: Vec<String> = group
            .series()
            .iter()
            .map(|series| sort_key(Some(&series.name), &rules))
            .collect();
        let collation: Vec<CollationKey> = sort_keys
            .iter()
            .map(|key| rules.collator.key(key))
            .collect();

        let series = group.series();
        let mut ordered: Vec<usize> = (0..group.len()).collect();
        ordered.sort_by(|&a, &b| {
            collation[a]
                .cmp(&collation[b])
                .then_with(|| series[a].id.cmp(&series[b].id))
        });

        Self {
            books,
            group,
            rules,
            sort_keys,
            ordered,
        }
    }

    /// Use `series`, in the given order, as the entity list
    ///
    /// Members still come from `books`; a listed series that no book refers
    /// to has no members. Repeated series are listed once.
    pub fn with_series(books: &'a [Book], locale: &str, series: &[Series]) -> Self {
        let mut ctx = Self::new(books, locale);
        let mut seen = HashSet::with_capacity(series.len());
        let mut ordered = Vec::with_capacity(series.len());
        for entity in series {
            let slot = ctx.group.insert_series(entity);
            if slot == ctx.sort_keys.len() {
                ctx.sort_keys.push(sort_key(Some(&entity.name), &ctx.rules));
            }
            if seen.insert(slot) {
                ordered.push(slot);
            }
        }
        ctx.ordered = ordered;
        ctx
    }

    pub fn books(&self) -> &'a [Book] {
        self.books
    }

    pub fn book(&self, idx: usize) -> &'a Book {
        &self.books[idx]
    }

    pub fn group(&self) -> &EntityGroup {
        &self.group
    }

    pub fn rules(&self) -> &SortRules {
        &self.rules
    }

    /// Series slots in display order
    pub fn ordered(&self) -> &[usize] {
        &self.ordered
    }

    /// Series in display order
    pub fn ordered_series(&self) -> impl Iterator<Item = &Series> {
        self.ordered.iter().map(|&slot| self.series(slot))
    }

    pub fn series(&self, slot: usize) -> &Series {
        &self.group.series()[slot]
    }

    pub fn sort_key(&self, slot: usize) -> &str {
        &self.sort_keys[slot]
    }

    /// Book indices of a series, in encounter order
    pub fn members_of(&self, id: SeriesId) -> &[usize] {
        self.group.members_of(id).unwrap_or_default()
    }

    pub fn series_count(&self) -> usize {
        self.group.len()
    }
}
