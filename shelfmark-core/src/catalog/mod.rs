//! Catalog tree construction
//!
//! [`TreeBuilder`] is the generic part: given a [`CatalogSource`] it decides,
//! level by level, whether a scope is split into letter buckets or paginated,
//! writes each page through the injected [`PagePersistence`], and returns the
//! entry linking to the scope's first page. Sources supply the sort keys,
//! summaries and leaf entries of the entities they list.
//!
//! [`PagePersistence`]: crate::sink::PagePersistence

mod books;
mod context;
mod series;

pub use books::BookSource;
pub use context::BuildContext;
pub use series::{SeriesCatalog, SeriesSource};

use crate::breadcrumb::Breadcrumbs;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::paginate::{page_count, page_number, PageCursor, Paginator};
use crate::partition::{display_key, split_by_letter, LetterBucket, OTHER_KEY};
use crate::sink::Collaborators;
use crate::sort::Collator;
use crate::types::{CatalogEntry, CatalogPage, ContentEntry, LinkKind, NextLink};

/// Separator between a location and its page number in file names
pub const PAGE_DELIM: &str = "_Page_";

/// Extension of generated page files
pub const PAGE_EXTENSION: &str = ".xml";

/// File name of page `number` of the pages at `location`
pub fn page_file(location: &str, number: usize) -> String {
    format!("{}{}{}{}", location, PAGE_DELIM, number, PAGE_EXTENSION)
}

/// File-name safe form of a bucket key
fn location_part(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_string()
            } else {
                format!("_{:04x}", c as u32)
            }
        })
        .collect()
}

/// Supplies the entities listed by a [`TreeBuilder`]
///
/// Entities are addressed by index; what the index refers to is up to the
/// source.
pub trait CatalogSource {
    /// Kind of feed the source's pages form, used on entries linking to them
    fn page_kind(&self) -> LinkKind;

    /// Entry for one entity, or `None` when it has nothing to show
    fn build_leaf(
        &self,
        collab: &mut Collaborators<'_>,
        crumbs: &Breadcrumbs,
        idx: usize,
        parent_urn: &str,
    ) -> Result<Option<CatalogEntry>>;

    /// Letter index of the entities; sources without one are only paginated
    fn letters(&self) -> Option<&dyn LetterIndex> {
        None
    }
}

/// What a source provides to have its listings split by letter
pub trait LetterIndex {
    fn collator(&self) -> &Collator;

    /// Sort key used for letter buckets
    fn sort_key(&self, idx: usize) -> &str;

    /// Display title of a letter bucket
    fn bucket_title(&self, key: &str) -> String;

    /// Summary of a group of entities
    fn summarize(&self, members: &[usize], collab: &Collaborators<'_>) -> String;
}

/// Letter-split budget of a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitState {
    /// Split levels still allowed below this one
    pub depth_remaining: u32,
    /// Sort-key prefix length used when this scope is split
    pub prefix_len: usize,
}

/// One listing: the entities it holds and how its pages are named
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub title: String,
    pub summary: Option<String>,
    pub urn: String,
    /// File name base of the scope's pages
    pub location: String,
    /// Entity indices in display order
    pub members: Vec<usize>,
    /// Path leading to the scope
    pub crumbs: Breadcrumbs,
    /// `None` when the scope must never be split by letter
    pub split: Option<SplitState>,
    pub icon: Option<String>,
}

/// Outcome of rendering a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub file: String,
    pub page_number: usize,
    /// Descriptor of the following page, not yet rendered
    pub next: Option<PageCursor>,
}

/// Buckets a listing is split into, with the budget they were made under
struct LetterSplit<'l> {
    letters: &'l dyn LetterIndex,
    split: SplitState,
    buckets: Vec<LetterBucket<usize>>,
}

/// Builds the page tree of one scope
pub struct TreeBuilder<'s, S> {
    source: &'s S,
    config: &'s CatalogConfig,
    paginator: Paginator,
}

impl<'s, S: CatalogSource> TreeBuilder<'s, S> {
    pub fn new(source: &'s S, config: &'s CatalogConfig) -> Self {
        Self {
            source,
            config,
            paginator: Paginator::new(config.page_capacity),
        }
    }

    /// Split decision for a group of `len` entities with the given budget
    pub fn splits(&self, len: usize, split: Option<SplitState>) -> bool {
        split.is_some_and(|split| split.depth_remaining > 0 && len > self.config.split_threshold)
    }

    /// Letter buckets `members` are split into, or `None` when they are paginated
    ///
    /// A split giving a single bucket is retried one prefix character longer
    /// while the depth budget allows, and dropped after that.
    fn letter_split(
        &self,
        members: &[usize],
        split: Option<SplitState>,
    ) -> Option<LetterSplit<'s>> {
        let letters = self.source.letters()?;
        let mut split = split?;
        while self.splits(members.len(), Some(split)) {
            let buckets = split_by_letter(members, split.prefix_len, letters.collator(), |&idx| {
                letters.sort_key(idx)
            });
            if buckets.len() > 1 {
                return Some(LetterSplit {
                    letters,
                    split,
                    buckets,
                });
            }
            split = SplitState {
                depth_remaining: split.depth_remaining - 1,
                prefix_len: split.prefix_len + 1,
            };
        }
        None
    }

    /// Whether `members` would be listed by letter rather than paginated
    pub fn is_split(&self, members: &[usize], split: Option<SplitState>) -> bool {
        self.letter_split(members, split).is_some()
    }

    /// Build every page of `scope` and return the entry linking to it
    ///
    /// An empty scope produces nothing.
    pub fn sub_catalog(
        &self,
        collab: &mut Collaborators<'_>,
        scope: &Scope,
    ) -> Result<Option<CatalogEntry>> {
        if scope.members.is_empty() {
            tracing::debug!(title = %scope.title, "Skipping empty scope");
            return Ok(None);
        }

        let first = self.render_page(collab, scope, 0)?;
        let mut cursor = first.next;
        while let Some(next) = cursor {
            cursor = self.render_page(collab, scope, next.offset)?.next;
        }

        Ok(Some(CatalogEntry::Content(ContentEntry {
            title: scope.title.clone(),
            urn: scope.urn.clone(),
            link: first.file,
            link_kind: self.source.page_kind(),
            summary: scope.summary.clone(),
            icon: scope.icon.clone(),
        })))
    }

    /// Build and persist the single page of `scope` starting at `offset`
    ///
    /// Following pages are only described by the returned cursor.
    pub fn render_page(
        &self,
        collab: &mut Collaborators<'_>,
        scope: &Scope,
        offset: usize,
    ) -> Result<RenderedPage> {
        let number = page_number(offset, self.paginator.capacity());
        let file = page_file(&scope.location, number);
        let here = scope.crumbs.append(scope.title.as_str(), file.as_str());

        let plan = self.letter_split(&scope.members, scope.split);
        tracing::trace!(
            title = %scope.title,
            size = scope.members.len(),
            offset,
            split = plan.is_some(),
            "Rendering catalog page"
        );

        let (entries, next, page_count) = match plan {
            Some(plan) => (self.letter_entries(collab, scope, plan, &here)?, None, 1),
            None => {
                let page = self.paginator.paginate(&scope.members, offset);
                let mut entries = Vec::with_capacity(page.items.len() + 1);
                for &idx in page.items {
                    if let Some(entry) = self.source.build_leaf(collab, &here, idx, &scope.urn)? {
                        entries.push(entry);
                    }
                }
                if let Some(cursor) = page.next {
                    entries.push(self.next_link(scope, cursor));
                }
                (entries, page.next, page.count)
            }
        };

        collab.pages.write_page(&CatalogPage {
            file: file.clone(),
            title: scope.title.clone(),
            urn: scope.urn.clone(),
            breadcrumbs: scope.crumbs.clone(),
            entries,
            page_number: number,
            page_count,
        })?;

        Ok(RenderedPage {
            file,
            page_number: number,
            next,
        })
    }

    /// One sub-catalog per letter bucket, in key order
    fn letter_entries(
        &self,
        collab: &mut Collaborators<'_>,
        scope: &Scope,
        plan: LetterSplit<'_>,
        here: &Breadcrumbs,
    ) -> Result<Vec<CatalogEntry>> {
        let LetterSplit {
            letters,
            split,
            buckets,
        } = plan;

        let mut entries = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            let title = letters.bucket_title(&bucket.key);
            let summary = letters.summarize(&bucket.members, collab);
            let child = Scope {
                title,
                summary: Some(summary),
                urn: format!("{}:{}", scope.urn, bucket.key),
                location: format!("{}_{}", scope.location, location_part(&bucket.key)),
                members: bucket.members,
                crumbs: here.clone(),
                split: Some(SplitState {
                    depth_remaining: split.depth_remaining - 1,
                    prefix_len: split.prefix_len + 1,
                }),
                icon: scope.icon.clone(),
            };
            if let Some(entry) = self.sub_catalog(collab, &child)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Link to the page described by `cursor`
    fn next_link(&self, scope: &Scope, cursor: PageCursor) -> CatalogEntry {
        let capacity = self.paginator.capacity();
        let number = page_number(cursor.offset, capacity);
        let count = page_count(scope.members.len(), capacity);
        let labels = &self.config.labels;
        let title = if number != count {
            labels.next(number, count)
        } else {
            labels.last_page.clone()
        };
        CatalogEntry::Next(NextLink {
            title,
            link: page_file(&scope.location, number),
        })
    }
}

/// Title of a letter bucket under the configured labels
pub(crate) fn letter_bucket_title(config: &CatalogConfig, key: &str) -> String {
    if key == OTHER_KEY {
        config.labels.other_title.clone()
    } else {
        config.labels.letter(&display_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file() {
        assert_eq!(page_file("series", 1), "series_Page_1.xml");
        assert_eq!(page_file("series/series_12", 3), "series/series_12_Page_3.xml");
    }

    #[test]
    fn test_location_part_escapes_non_letters() {
        assert_eq!(location_part("AB"), "AB");
        assert_eq!(location_part("_"), "_005f");
        assert_eq!(location_part("A'"), "A_0027");
    }
}
