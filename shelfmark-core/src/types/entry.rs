//! Catalog entries and finalized pages

use crate::breadcrumb::Breadcrumbs;
use serde::{Deserialize, Serialize};

/// What the link of a content entry points at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// A catalog page listing further catalog pages
    Navigation,
    /// A catalog page listing books
    AcquisitionFeed,
    /// A book file
    Acquisition,
}

/// A regular catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntry {
    pub title: String,
    pub urn: String,
    pub link: String,
    pub link_kind: LinkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A synthetic "more items" entry leading to the next page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextLink {
    pub title: String,
    pub link: String,
}

/// The output unit of the catalog builder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Content(ContentEntry),
    Next(NextLink),
}

impl CatalogEntry {
    pub fn title(&self) -> &str {
        match self {
            CatalogEntry::Content(entry) => &entry.title,
            CatalogEntry::Next(next) => &next.title,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            CatalogEntry::Content(entry) => &entry.link,
            CatalogEntry::Next(next) => &next.link,
        }
    }

    pub fn is_next(&self) -> bool {
        matches!(self, CatalogEntry::Next(_))
    }

    pub fn as_content(&self) -> Option<&ContentEntry> {
        match self {
            CatalogEntry::Content(entry) => Some(entry),
            CatalogEntry::Next(_) => None,
        }
    }
}

/// A finalized page, ready to be handed to page persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogPage {
    /// File name relative to the catalog root, also used as the link target
    pub file: String,
    pub title: String,
    pub urn: String,
    /// Navigation path leading to this page (not including the page itself)
    pub breadcrumbs: Breadcrumbs,
    pub entries: Vec<CatalogEntry>,
    /// 1-based ordinal within its pagination run
    pub page_number: usize,
    pub page_count: usize,
}

impl CatalogPage {
    /// The next-link entry of this page, if it is not the last one
    pub fn next_link(&self) -> Option<&NextLink> {
        self.entries.iter().find_map(|entry| match entry {
            CatalogEntry::Next(next) => Some(next),
            CatalogEntry::Content(_) => None,
        })
    }

    /// Content entries, next-links excluded
    pub fn content(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter().filter_map(CatalogEntry::as_content)
    }
}
