//! Info command implementation

use super::load_library;
use crate::config::CatalogArgs;
use anyhow::Result;
use serde::Serialize;
use shelfmark_core::partition::{display_key, split_by_letter, OTHER_KEY};
use shelfmark_core::SeriesCatalog;

/// Library info output
#[derive(Serialize)]
struct LibraryInfo {
    books: usize,
    series: usize,
    ungrouped: usize,
    listing_pages: usize,
    buckets: Vec<BucketInfo>,
}

#[derive(Serialize)]
struct BucketInfo {
    key: String,
    series: usize,
}

/// Display series statistics of a library
pub fn info(input: &str, args: &CatalogArgs, json: bool) -> Result<()> {
    let config = args.resolve()?;
    let library = load_library(input)?;
    let catalog = SeriesCatalog::new(&library.books, &config)?;
    let ctx = catalog.context();

    let collator = &ctx.rules().collator;
    let buckets = split_by_letter(ctx.ordered(), 1, collator, |&slot| ctx.sort_key(slot))
        .into_iter()
        .map(|bucket| BucketInfo {
            key: bucket.key,
            series: bucket.members.len(),
        })
        .collect();

    let info = LibraryInfo {
        books: library.len(),
        series: ctx.series_count(),
        ungrouped: ctx.group().ungrouped(),
        listing_pages: catalog.listing_page_count(),
        buckets,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Books:         {}", info.books);
        println!("Series:        {}", info.series);
        println!("Ungrouped:     {}", info.ungrouped);
        println!("Listing pages: {}", info.listing_pages);
        if !info.buckets.is_empty() {
            println!("Letters:");
            for bucket in &info.buckets {
                let label = if bucket.key == OTHER_KEY {
                    config.labels.other_title.clone()
                } else {
                    display_key(&bucket.key)
                };
                println!("  {:<14} {}", label, bucket.series);
            }
        }
    }

    Ok(())
}
