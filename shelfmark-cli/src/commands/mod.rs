//! CLI command implementations

mod generate;
mod info;
mod page;

pub use generate::generate;
pub use info::info;
pub use page::page;

use anyhow::{Context, Result};
use shelfmark_core::Library;
use std::path::Path;

/// Read the library file named on the command line
fn load_library(input: &str) -> Result<Library> {
    let library = Library::load(Path::new(input))
        .with_context(|| format!("Failed to read library: {}", input))?;
    tracing::debug!(books = library.len(), "Loaded library from {}", input);
    Ok(library)
}
