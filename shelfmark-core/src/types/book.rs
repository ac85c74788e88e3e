//! The Book type - one record of the source collection

use super::Series;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a book in the source collection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// A book as read from the source collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier for this book
    pub id: BookId,

    /// Book title (may be empty)
    #[serde(default)]
    pub title: String,

    /// Authors, in display order
    #[serde(default)]
    pub authors: Vec<String>,

    /// Series this book belongs to, if any
    #[serde(default)]
    pub series: Option<Series>,

    /// Position in the series (can be fractional for novellas, etc.)
    #[serde(default)]
    pub series_index: Option<f32>,

    /// Language code (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Location of the book file, used as the acquisition link
    #[serde(default)]
    pub path: Option<String>,
}

impl Book {
    /// Create a new book with the given title and language
    pub fn new(id: u64, title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: BookId(id),
            title: title.into(),
            authors: Vec::new(),
            series: None,
            series_index: None,
            language: language.into(),
            path: None,
        }
    }

    /// Place the book in a series at the given position
    pub fn in_series(mut self, series: Series, index: Option<f32>) -> Self {
        self.series = Some(series);
        self.series_index = index;
        self
    }

    /// Sort value of the series position; an unknown position sorts first
    pub fn position_key(&self) -> f32 {
        self.series_index.unwrap_or(f32::MIN)
    }

    /// Display form of the series position, without a trailing `.0`
    pub fn position_label(&self) -> Option<String> {
        self.series_index.map(|index| {
            if index.fract() == 0.0 && index.abs() < 1e9 {
                format!("{}", index as i64)
            } else {
                format!("{}", index)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_defaults_from_json() {
        let book: Book = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(book.id, BookId(3));
        assert_eq!(book.title, "");
        assert_eq!(book.language, "en");
        assert!(book.series.is_none());
    }

    #[test]
    fn test_position_label() {
        let series = Series::new(1, "Dune");
        let whole = Book::new(1, "Dune", "en").in_series(series.clone(), Some(1.0));
        let half = Book::new(2, "Interlude", "en").in_series(series.clone(), Some(1.5));
        let unknown = Book::new(3, "Extra", "en").in_series(series, None);

        assert_eq!(whole.position_label().as_deref(), Some("1"));
        assert_eq!(half.position_label().as_deref(), Some("1.5"));
        assert_eq!(unknown.position_label(), None);
        assert_eq!(unknown.position_key(), f32::MIN);
    }
}
