//! Book listings inside a series page

use super::{BuildContext, CatalogSource};
use crate::breadcrumb::Breadcrumbs;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::sink::Collaborators;
use crate::types::{Book, CatalogEntry, ContentEntry, LinkKind};

/// Lists books by index into the build's book collection
///
/// Book listings are only ever paginated: their scopes carry no split budget.
pub struct BookSource<'c, 'a> {
    ctx: &'c BuildContext<'a>,
    config: &'c CatalogConfig,
}

impl<'c, 'a> BookSource<'c, 'a> {
    pub fn new(ctx: &'c BuildContext<'a>, config: &'c CatalogConfig) -> Self {
        Self { ctx, config }
    }

    fn entry_title(&self, book: &Book) -> String {
        match book.position_label() {
            Some(position) => self.config.labels.book(&position, &book.title),
            None => book.title.clone(),
        }
    }
}

impl CatalogSource for BookSource<'_, '_> {
    fn page_kind(&self) -> LinkKind {
        LinkKind::AcquisitionFeed
    }

    fn build_leaf(
        &self,
        _collab: &mut Collaborators<'_>,
        _crumbs: &Breadcrumbs,
        idx: usize,
        _parent_urn: &str,
    ) -> Result<Option<CatalogEntry>> {
        let book = self.ctx.book(idx);
        let summary = (!book.authors.is_empty()).then(|| book.authors.join(", "));
        Ok(Some(CatalogEntry::Content(ContentEntry {
            title: self.entry_title(book),
            urn: format!("{}:book:{}", self.config.urn_prefix, book.id),
            link: book.path.clone().unwrap_or_default(),
            link_kind: LinkKind::Acquisition,
            summary,
            icon: None,
        })))
    }
}
