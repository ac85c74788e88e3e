//! Shelfmark CLI - builds series catalogs from a JSON book library

mod commands;
mod config;
mod progress;
mod search;
mod writer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::CatalogArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a 1-based page number
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("pages are numbered from 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full series catalog as Atom feed pages
    Generate {
        /// Library JSON file
        library: String,

        /// Output directory
        #[arg(short, long)]
        output: String,

        /// Build the catalog without writing any file
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Render one page of the top-level series listing
    Page {
        /// Library JSON file
        library: String,

        /// Page number
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Display series statistics of a library
    Info {
        /// Library JSON file
        library: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "shelfmark_cli=debug,shelfmark_core=debug"
    } else {
        "shelfmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            library,
            output,
            dry_run,
            catalog,
        } => commands::generate(&library, &output, &catalog, dry_run),

        Commands::Page {
            library,
            page,
            json,
            catalog,
        } => commands::page(&library, page, &catalog, json),

        Commands::Info {
            library,
            json,
            catalog,
        } => commands::info(&library, &catalog, json),
    }
}
