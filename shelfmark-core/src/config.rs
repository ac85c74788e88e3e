//! Catalog configuration
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it changes:
//!
//! ```toml
//! split_threshold = 100   # series count above which a level is split by letter
//! page_capacity = 25      # entries per page before a "next page" link
//! max_split_depth = 1     # 0 disables letter splitting
//! locale = "en"
//!
//! [labels]
//! letter_title = "{kind} starting with {letter}"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Icon file used for series entries
pub const ICON_SERIES: &str = "series.png";

/// Thresholds, naming and labels for a catalog build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Group size above which a level is split by letter
    pub split_threshold: usize,

    /// Maximum content entries per page
    pub page_capacity: usize,

    /// How many nested letter-split levels are allowed (0 = never split)
    pub max_split_depth: u32,

    /// Collation locale
    pub locale: String,

    /// Prefix series titles with the localized series word
    pub add_series_word: bool,

    /// Title of the top-level series page
    pub root_title: String,

    /// Prefix of every generated URN
    pub urn_prefix: String,

    /// Folder (and file name base) of top-level series pages
    pub series_folder: String,

    /// Location of external icons; built-in icon names are used when unset
    pub icon_prefix: Option<String>,

    /// Maximum length of a generated summary
    pub summary_max_len: usize,

    /// Localized strings
    pub labels: Labels,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            split_threshold: 100,
            page_capacity: 25,
            max_split_depth: 1,
            locale: "en".to_string(),
            add_series_word: false,
            root_title: "Series".to_string(),
            urn_prefix: "urn:shelfmark".to_string(),
            series_folder: "series".to_string(),
            icon_prefix: None,
            summary_max_len: 200,
            labels: Labels::default(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_capacity == 0 {
            return Err(ConfigError::ZeroPageCapacity);
        }
        self.labels.validate()
    }

    /// Icon reference for series entries
    pub fn series_icon(&self) -> String {
        match &self.icon_prefix {
            Some(prefix) => format!("{}{}", prefix, ICON_SERIES),
            None => ICON_SERIES.to_string(),
        }
    }
}

/// Localized strings used in generated titles
///
/// Placeholders are written in braces: `{kind}`, `{letter}`, `{page}`,
/// `{pages}`, `{position}` and `{title}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Labels {
    /// Word prefixed to series titles when `add_series_word` is set
    pub series_word: String,
    /// Name of the entity kind, used in letter titles
    pub series_kind: String,
    pub letter_title: String,
    /// Title of the bucket holding titles that do not start with a letter
    pub other_title: String,
    pub next_page: String,
    pub last_page: String,
    pub book_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            series_word: "Series:".to_string(),
            series_kind: "Series".to_string(),
            letter_title: "{kind} starting with {letter}".to_string(),
            other_title: "Other series".to_string(),
            next_page: "Page {page} of {pages}".to_string(),
            last_page: "Last page".to_string(),
            book_title: "{position} - {title}".to_string(),
        }
    }
}

impl Labels {
    fn validate(&self) -> Result<(), ConfigError> {
        let required: [(&'static str, &str, &'static str); 4] = [
            ("letter_title", &self.letter_title, "{letter}"),
            ("next_page", &self.next_page, "{page}"),
            ("book_title", &self.book_title, "{title}"),
            ("book_title", &self.book_title, "{position}"),
        ];
        for (label, text, placeholder) in required {
            if !text.contains(placeholder) {
                return Err(ConfigError::MissingPlaceholder { label, placeholder });
            }
        }
        Ok(())
    }

    pub fn letter(&self, letter: &str) -> String {
        self.letter_title
            .replace("{kind}", &self.series_kind)
            .replace("{letter}", letter)
    }

    pub fn next(&self, page: usize, pages: usize) -> String {
        self.next_page
            .replace("{page}", &page.to_string())
            .replace("{pages}", &pages.to_string())
    }

    pub fn book(&self, position: &str, title: &str) -> String {
        self.book_title
            .replace("{position}", position)
            .replace("{title}", title)
    }
}
