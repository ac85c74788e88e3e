//! Shelfmark Core Library
//!
//! Builds a navigable, size-bounded catalog of the series found in a book
//! collection. Series are ordered with locale-aware rules, large listings are
//! split into letter buckets and long ones are paginated; every page carries
//! the breadcrumb path that leads to it.
//!
//! Rendering and storing pages is left to the [`sink::PagePersistence`]
//! implementation handed to the build, together with the other
//! [`sink::Collaborators`].

pub mod breadcrumb;
pub mod catalog;
pub mod config;
pub mod error;
pub mod group;
pub mod paginate;
pub mod partition;
pub mod sink;
pub mod sort;
pub mod types;

pub use breadcrumb::{Breadcrumbs, Crumb};
pub use catalog::{BuildContext, SeriesCatalog};
pub use config::{CatalogConfig, Labels};
pub use error::{CatalogError, ConfigError, Result};
pub use sink::{
    Collaborators, ListSummarizer, MemoryPages, NoProgress, NoSearchIndex, PagePersistence,
    ProgressSink, SearchIndex, Summarizer,
};
pub use types::{
    Book, BookId, CatalogEntry, CatalogPage, ContentEntry, LinkKind, Library, NextLink, Series,
    SeriesId,
};
