//! Error types for Shelfmark Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for catalog builds
///
/// Empty groups and missing members are not errors; they simply produce no
/// entry. The only fatal condition during a build is a failure raised by a
/// collaborator, which is carried through unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Library error: {0}")]
    Library(#[from] serde_json::Error),
}

/// Errors raised while validating a catalog configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("page_capacity must be at least 1")]
    ZeroPageCapacity,

    #[error("Label '{label}' is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        label: &'static str,
        placeholder: &'static str,
    },
}
