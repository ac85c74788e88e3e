//! Core types: the source collection and the catalog output

mod book;
mod entry;
mod library;
mod series;

pub use book::{Book, BookId};
pub use entry::{CatalogEntry, CatalogPage, ContentEntry, LinkKind, NextLink};
pub use library::Library;
pub use series::{Series, SeriesId};
