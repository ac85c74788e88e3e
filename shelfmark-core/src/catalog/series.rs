//! Series listings: the top-level tree and the per-series leaf pages

use super::{
    letter_bucket_title, BookSource, BuildContext, CatalogSource, LetterIndex, RenderedPage, Scope,
    SplitState, TreeBuilder,
};
use crate::breadcrumb::Breadcrumbs;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::paginate::page_count;
use crate::sink::Collaborators;
use crate::sort::Collator;
use crate::types::{Book, CatalogEntry, LinkKind, Series};

/// Type marker used in series URNs and file names
pub const SERIES_TYPE: &str = "series";

/// Lists series; each leaf is the paginated list of the series' books
pub struct SeriesSource<'c, 'a> {
    ctx: &'c BuildContext<'a>,
    config: &'c CatalogConfig,
    nesting: Option<&'c str>,
}

impl<'c, 'a> SeriesSource<'c, 'a> {
    pub fn new(ctx: &'c BuildContext<'a>, config: &'c CatalogConfig) -> Self {
        Self {
            ctx,
            config,
            nesting: None,
        }
    }

    /// Series pages are written inside `folder` instead of the series folder
    pub fn nested_under(mut self, folder: &'c str) -> Self {
        self.nesting = Some(folder);
        self
    }

    fn series_location(&self, series: &Series) -> String {
        let folder = self.nesting.unwrap_or(&self.config.series_folder);
        format!("{}/{}_{}", folder, SERIES_TYPE, series.id)
    }

    fn series_title(&self, series: &Series) -> String {
        if self.config.add_series_word {
            format!("{} {}", self.config.labels.series_word, series.name)
        } else {
            series.name.clone()
        }
    }
}

impl LetterIndex for SeriesSource<'_, '_> {
    fn collator(&self) -> &Collator {
        &self.ctx.rules().collator
    }

    fn sort_key(&self, slot: usize) -> &str {
        self.ctx.sort_key(slot)
    }

    fn bucket_title(&self, key: &str) -> String {
        letter_bucket_title(self.config, key)
    }

    fn summarize(&self, members: &[usize], collab: &Collaborators<'_>) -> String {
        let series: Vec<&Series> = members.iter().map(|&slot| self.ctx.series(slot)).collect();
        collab.summarizer.summarize_series(&series)
    }
}

impl CatalogSource for SeriesSource<'_, '_> {
    fn page_kind(&self) -> LinkKind {
        LinkKind::Navigation
    }

    fn letters(&self) -> Option<&dyn LetterIndex> {
        Some(self)
    }

    fn build_leaf(
        &self,
        collab: &mut Collaborators<'_>,
        crumbs: &Breadcrumbs,
        slot: usize,
        parent_urn: &str,
    ) -> Result<Option<CatalogEntry>> {
        let series = self.ctx.series(slot);
        tracing::debug!("{}/{}", crumbs, series);

        collab.progress.show_message(&crumbs.to_string());
        if self.nesting.is_none() {
            collab.progress.advance();
        }

        let mut members = self.ctx.members_of(series.id).to_vec();
        if members.is_empty() {
            tracing::debug!(series = %series, "Series has no books, skipping");
            return Ok(None);
        }

        // Stable: books at the same position keep their encounter order
        members.sort_by(|&a, &b| {
            self.ctx
                .book(a)
                .position_key()
                .total_cmp(&self.ctx.book(b).position_key())
        });

        let books: Vec<&Book> = members.iter().map(|&idx| self.ctx.book(idx)).collect();
        let scope = Scope {
            title: self.series_title(series),
            summary: Some(collab.summarizer.summarize_books(&books)),
            urn: format!("{}:{}:{}", parent_urn, SERIES_TYPE, series.id),
            location: self.series_location(series),
            members,
            crumbs: crumbs.clone(),
            split: None,
            icon: Some(self.config.series_icon()),
        };

        let source = BookSource::new(self.ctx, self.config);
        let entry = TreeBuilder::new(&source, self.config).sub_catalog(collab, &scope)?;
        if let Some(entry) = &entry {
            collab.search_index.add_series(series, entry);
        }
        Ok(entry)
    }
}

/// The series catalog of a book collection
///
/// Derives and orders the series once, then builds either the whole tree
/// ([`SeriesCatalog::build`]) or one page of the top-level listing
/// ([`SeriesCatalog::render_listing_page`]).
pub struct SeriesCatalog<'a> {
    ctx: BuildContext<'a>,
    config: &'a CatalogConfig,
    nesting: Option<String>,
}

impl<'a> SeriesCatalog<'a> {
    pub fn new(books: &'a [Book], config: &'a CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ctx: BuildContext::new(books, &config.locale),
            config,
            nesting: None,
        })
    }

    /// Catalog of the given series, listed in the given order
    ///
    /// Series that no book refers to stay in the listing but produce no entry.
    pub fn with_series(
        books: &'a [Book],
        config: &'a CatalogConfig,
        series: &[Series],
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ctx: BuildContext::with_series(books, &config.locale, series),
            config,
            nesting: None,
        })
    }

    /// Build the catalog inside another grouping's folder (e.g. an author's)
    pub fn nested_under(mut self, folder: impl Into<String>) -> Self {
        self.nesting = Some(folder.into());
        self
    }

    pub fn context(&self) -> &BuildContext<'a> {
        &self.ctx
    }

    fn source(&self) -> SeriesSource<'_, 'a> {
        let source = SeriesSource::new(&self.ctx, self.config);
        match &self.nesting {
            Some(folder) => source.nested_under(folder),
            None => source,
        }
    }

    /// Scope of the top-level listing
    pub fn root_scope(&self, collab: &Collaborators<'_>) -> Scope {
        let (urn, location) = match &self.nesting {
            Some(folder) => (
                format!("{}:{}:{}", self.config.urn_prefix, folder, SERIES_TYPE),
                format!("{}/{}", folder, self.config.series_folder),
            ),
            None => (
                format!("{}:{}", self.config.urn_prefix, SERIES_TYPE),
                self.config.series_folder.clone(),
            ),
        };
        let members = self.ctx.ordered().to_vec();
        Scope {
            title: self.config.root_title.clone(),
            summary: Some(self.source().summarize(&members, collab)),
            urn,
            location,
            members,
            crumbs: Breadcrumbs::new(),
            split: Some(self.root_split()),
            icon: Some(self.config.series_icon()),
        }
    }

    fn root_split(&self) -> SplitState {
        SplitState {
            depth_remaining: self.config.max_split_depth,
            prefix_len: 1,
        }
    }

    /// Build every page of the tree
    ///
    /// Returns the entry linking to the top-level page, or `None` when no
    /// book belongs to a series.
    pub fn build(&self, collab: &mut Collaborators<'_>) -> Result<Option<CatalogEntry>> {
        let scope = self.root_scope(collab);
        let source = self.source();
        let entry = TreeBuilder::new(&source, self.config).sub_catalog(collab, &scope)?;
        tracing::info!(
            books = self.ctx.books().len(),
            series = self.ctx.series_count(),
            ungrouped = self.ctx.group().ungrouped(),
            "Built series catalog"
        );
        Ok(entry)
    }

    /// Number of pages of the top-level listing
    pub fn listing_page_count(&self) -> usize {
        let source = self.source();
        let builder = TreeBuilder::new(&source, self.config);
        let members = self.ctx.ordered();
        if builder.is_split(members, Some(self.root_split())) {
            1
        } else {
            page_count(members.len(), self.config.page_capacity)
        }
    }

    /// Render page `number` (1-based) of the top-level listing on its own
    ///
    /// Nested pages reachable from it are built too; its successors are not.
    /// Returns `None` when the page does not exist.
    pub fn render_listing_page(
        &self,
        collab: &mut Collaborators<'_>,
        number: usize,
    ) -> Result<Option<RenderedPage>> {
        if number == 0 || number > self.listing_page_count() {
            return Ok(None);
        }
        let scope = self.root_scope(collab);
        let source = self.source();
        let offset = (number - 1) * self.config.page_capacity;
        TreeBuilder::new(&source, self.config)
            .render_page(collab, &scope, offset)
            .map(Some)
    }
}
