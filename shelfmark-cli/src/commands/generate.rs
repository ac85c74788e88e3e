//! Generate command implementation

use super::load_library;
use crate::config::CatalogArgs;
use crate::progress::BarProgress;
use crate::search::{JsonSearchIndex, INDEX_FILE};
use crate::writer::AtomPages;
use anyhow::{Context, Result};
use shelfmark_core::{Collaborators, ListSummarizer, SeriesCatalog};
use std::fs;
use std::path::Path;

/// Build the whole series catalog and write it to `output`
pub fn generate(input: &str, output: &str, args: &CatalogArgs, dry_run: bool) -> Result<()> {
    let config = args.resolve()?;
    let library = load_library(input)?;
    let output_path = Path::new(output);

    if !dry_run {
        fs::create_dir_all(output_path)
            .with_context(|| format!("Failed to create output directory: {}", output))?;
    }

    let catalog = SeriesCatalog::new(&library.books, &config)?;
    let series_count = catalog.context().series_count();

    let summarizer = ListSummarizer::new(config.summary_max_len);
    let mut progress = BarProgress::new(series_count)?;
    let mut search_index = JsonSearchIndex::new();
    let mut pages = AtomPages::new(output_path).dry_run(dry_run);

    let entry = {
        let mut collab = Collaborators {
            summarizer: &summarizer,
            progress: &mut progress,
            search_index: &mut search_index,
            pages: &mut pages,
        };
        catalog
            .build(&mut collab)
            .with_context(|| format!("Failed to build catalog in {}", output))?
    };
    progress.finish();

    let Some(entry) = entry else {
        println!("No series found in {}", input);
        return Ok(());
    };

    if !dry_run {
        search_index.save(&output_path.join(INDEX_FILE))?;
    }

    let verb = if dry_run { "Rendered" } else { "Wrote" };
    println!(
        "{} {} pages for {} series ({} books)",
        verb,
        pages.written(),
        search_index.records().len(),
        library.len()
    );
    println!("Catalog root: {}", entry.link());

    Ok(())
}
