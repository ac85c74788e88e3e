//! Collaborators the catalog builder reports to
//!
//! The builder never reaches for ambient state: summaries, progress, search
//! registration and page persistence all go through the [`Collaborators`]
//! capability set handed to each build.

use crate::types::{Book, CatalogEntry, CatalogPage, Series};
use std::io;

/// Produces the summary text of a group
pub trait Summarizer {
    fn summarize_series(&self, series: &[&Series]) -> String;

    fn summarize_books(&self, books: &[&Book]) -> String;
}

/// Receives progress while the tree is built
pub trait ProgressSink {
    /// Breadcrumb path of the entity being visited
    fn show_message(&mut self, message: &str);

    /// One top-level entity has been visited
    fn advance(&mut self);
}

/// Registers built series pages for search
pub trait SearchIndex {
    fn add_series(&mut self, series: &Series, entry: &CatalogEntry);
}

/// Writes finalized pages
pub trait PagePersistence {
    fn write_page(&mut self, page: &CatalogPage) -> io::Result<()>;
}

/// The capability set threaded through a build
pub struct Collaborators<'a> {
    pub summarizer: &'a dyn Summarizer,
    pub progress: &'a mut dyn ProgressSink,
    pub search_index: &'a mut dyn SearchIndex,
    pub pages: &'a mut dyn PagePersistence,
}

/// Comma-joined names, cut at a maximum length
#[derive(Debug, Clone, Copy)]
pub struct ListSummarizer {
    max_len: usize,
}

impl ListSummarizer {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    fn join<'a>(&self, names: impl Iterator<Item = &'a str>) -> String {
        let mut summary = String::new();
        for name in names {
            let separator = if summary.is_empty() { 0 } else { 2 };
            if summary.chars().count() + separator + name.chars().count() > self.max_len {
                summary.push_str(if summary.is_empty() { "..." } else { ", ..." });
                break;
            }
            if !summary.is_empty() {
                summary.push_str(", ");
            }
            summary.push_str(name);
        }
        summary
    }
}

impl Summarizer for ListSummarizer {
    fn summarize_series(&self, series: &[&Series]) -> String {
        self.join(series.iter().map(|s| s.name.as_str()))
    }

    fn summarize_books(&self, books: &[&Book]) -> String {
        self.join(books.iter().map(|b| b.title.as_str()))
    }
}

/// Discards progress reports
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn show_message(&mut self, _message: &str) {}

    fn advance(&mut self) {}
}

/// Discards search registrations
#[derive(Debug, Default)]
pub struct NoSearchIndex;

impl SearchIndex for NoSearchIndex {
    fn add_series(&mut self, _series: &Series, _entry: &CatalogEntry) {}
}

/// Keeps pages in memory, in the order they were written
#[derive(Debug, Default)]
pub struct MemoryPages {
    pub pages: Vec<CatalogPage>,
}

impl MemoryPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file: &str) -> Option<&CatalogPage> {
        self.pages.iter().find(|page| page.file == file)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PagePersistence for MemoryPages {
    fn write_page(&mut self, page: &CatalogPage) -> io::Result<()> {
        self.pages.push(page.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_summarizer_truncates() {
        let summarizer = ListSummarizer::new(12);
        let series = [
            Series::new(1, "Dune"),
            Series::new(2, "Mort"),
            Series::new(3, "Foundation"),
        ];
        let refs: Vec<&Series> = series.iter().collect();
        assert_eq!(summarizer.summarize_series(&refs), "Dune, Mort, ...");
        assert_eq!(summarizer.summarize_series(&refs[..2]), "Dune, Mort");
        assert_eq!(summarizer.summarize_series(&[]), "");
    }

    #[test]
    fn test_list_summarizer_first_name_too_long() {
        let summarizer = ListSummarizer::new(3);
        let book = Book::new(1, "Foundation", "en");
        assert_eq!(summarizer.summarize_books(&[&book]), "...");
    }
}
