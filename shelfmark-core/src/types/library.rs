//! The source book collection

use super::Book;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Book collection read from a JSON library file
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Library {
    pub books: Vec<Book>,
}

impl Library {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Parse a library from JSON text
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Load a library from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
