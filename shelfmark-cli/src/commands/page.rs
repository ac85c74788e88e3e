//! Page command implementation

use super::load_library;
use crate::config::CatalogArgs;
use anyhow::{bail, Context, Result};
use shelfmark_core::{
    CatalogEntry, Collaborators, ListSummarizer, MemoryPages, NoProgress, NoSearchIndex,
    SeriesCatalog,
};

/// Render one page of the top-level listing and print it
pub fn page(input: &str, number: usize, args: &CatalogArgs, json: bool) -> Result<()> {
    let config = args.resolve()?;
    let library = load_library(input)?;
    let catalog = SeriesCatalog::new(&library.books, &config)?;

    let count = catalog.listing_page_count();
    let summarizer = ListSummarizer::new(config.summary_max_len);
    let mut pages = MemoryPages::new();
    let rendered = {
        let mut collab = Collaborators {
            summarizer: &summarizer,
            progress: &mut NoProgress,
            search_index: &mut NoSearchIndex,
            pages: &mut pages,
        };
        catalog.render_listing_page(&mut collab, number)?
    };

    let Some(rendered) = rendered else {
        bail!("Page {} does not exist (listing has {} pages)", number, count);
    };
    let page = pages
        .get(&rendered.file)
        .context("Rendered page was not recorded")?;

    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    println!("{} (page {} of {})", page.title, page.page_number, page.page_count);
    println!("File: {}", page.file);
    for entry in &page.entries {
        match entry {
            CatalogEntry::Content(content) => {
                println!("  {:<40} {}", content.title, content.link);
            }
            CatalogEntry::Next(next) => {
                println!("  > {:<38} {}", next.title, next.link);
            }
        }
    }

    Ok(())
}
