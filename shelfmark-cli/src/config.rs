//! Catalog configuration: TOML file plus command-line overrides

use anyhow::{Context, Result};
use clap::Args;
use shelfmark_core::CatalogConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// TOML file with catalog settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entries per page
    #[arg(long)]
    pub page_capacity: Option<usize>,

    /// Listings longer than this are split by letter
    #[arg(long)]
    pub split_threshold: Option<usize>,

    /// Maximum number of nested letter splits
    #[arg(long)]
    pub max_split_depth: Option<u32>,

    /// Collation locale (e.g. en, sv-SE)
    #[arg(long)]
    pub locale: Option<String>,

    /// Prefix series titles with the series word
    #[arg(long)]
    pub series_word: bool,
}

impl CatalogArgs {
    /// Effective configuration: defaults, then the file, then the flags
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(capacity) = self.page_capacity {
            config.page_capacity = capacity;
        }
        if let Some(threshold) = self.split_threshold {
            config.split_threshold = threshold;
        }
        if let Some(depth) = self.max_split_depth {
            config.max_split_depth = depth;
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if self.series_word {
            config.add_series_word = true;
        }

        config.validate().context("Invalid catalog configuration")?;
        Ok(config)
    }
}

/// Parse a catalog configuration file
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: CatalogConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = CatalogArgs::default().resolve().unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "page_capacity = 10\nlocale = \"sv\"\n\n[labels]\nother_title = \"Övriga\""
        )
        .unwrap();

        let args = CatalogArgs {
            config: Some(file.path().to_path_buf()),
            page_capacity: Some(5),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.page_capacity, 5);
        assert_eq!(config.locale, "sv");
        assert_eq!(config.labels.other_title, "Övriga");
        assert_eq!(config.labels.last_page, "Last page");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let args = CatalogArgs {
            page_capacity: Some(0),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }
}
