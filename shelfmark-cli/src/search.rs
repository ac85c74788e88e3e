//! Search index of generated series pages, saved as JSON

use anyhow::{Context, Result};
use serde::Serialize;
use shelfmark_core::{CatalogEntry, SearchIndex, Series, SeriesId};
use std::fs;
use std::path::Path;

/// File name of the index inside the output directory
pub const INDEX_FILE: &str = "search_index.json";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRecord {
    pub id: SeriesId,
    pub name: String,
    pub urn: String,
    pub link: String,
}

/// Collects one record per series page
#[derive(Debug, Default)]
pub struct JsonSearchIndex {
    records: Vec<SearchRecord>,
}

impl JsonSearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Write the index, records sorted by series id
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut records = self.records.clone();
        records.sort_by_key(|r| r.id);
        let data = serde_json::to_string_pretty(&records)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write search index: {}", path.display()))?;
        Ok(())
    }
}

impl SearchIndex for JsonSearchIndex {
    fn add_series(&mut self, series: &Series, entry: &CatalogEntry) {
        let urn = entry
            .as_content()
            .map(|content| content.urn.clone())
            .unwrap_or_default();
        self.records.push(SearchRecord {
            id: series.id,
            name: series.name.clone(),
            urn,
            link: entry.link().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_core::{ContentEntry, LinkKind};

    #[test]
    fn test_save_sorted_by_id() {
        let mut index = JsonSearchIndex::new();
        for (id, name) in [(9, "Saga"), (2, "Dune")] {
            let entry = CatalogEntry::Content(ContentEntry {
                title: name.to_string(),
                urn: format!("urn:shelfmark:series:series:{}", id),
                link: format!("series/series_{}_Page_1.xml", id),
                link_kind: LinkKind::AcquisitionFeed,
                summary: None,
                icon: None,
            });
            index.add_series(&Series::new(id, name), &entry);
        }
        assert_eq!(index.records().len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INDEX_FILE);
        index.save(&path).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved[0]["name"], "Dune");
        assert_eq!(saved[1]["link"], "series/series_9_Page_1.xml");
    }
}
