//! ReMakeup CLI - sitemap generation and catalog browsing.
//!
//! # Usage
//!
//! ```bash
//! # Regenerate public/sitemap.xml from the backend's categories
//! rm-cli sitemap
//!
//! # Write somewhere else, for another site
//! rm-cli sitemap --output dist/sitemap.xml --site-url https://staging.remakeup.com.br
//!
//! # Browse the catalog as JSON
//! rm-cli catalog --category 5 --brand melu --search matte --page 0
//! ```
//!
//! # Commands
//!
//! - `sitemap` - Write the sitemap file
//! - `catalog` - Print one filtered page of the catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rm-cli")]
#[command(author, version, about = "ReMakeup Store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap.xml from the backend's categories
    Sitemap {
        /// Output file
        #[arg(short, long, default_value = "public/sitemap.xml")]
        output: PathBuf,

        /// Public site URL (defaults to `REMAKEUP_SITE_URL`)
        #[arg(long)]
        site_url: Option<String>,
    },
    /// Print one page of the filtered catalog as JSON
    Catalog {
        /// Category id
        #[arg(short, long)]
        category: Option<i64>,

        /// Brand name (accents and case are ignored)
        #[arg(short, long)]
        brand: Option<String>,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Products per page
        #[arg(long, default_value = "12")]
        page_size: NonZeroUsize,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Sitemap { output, site_url } => {
            commands::sitemap::generate(&output, site_url.as_deref()).await?;
        }
        Commands::Catalog {
            category,
            brand,
            search,
            page,
            page_size,
        } => {
            let query = commands::catalog::CatalogQuery {
                category,
                brand,
                search,
                page,
                page_size,
            };
            commands::catalog::browse(&query).await?;
        }
    }
    Ok(())
}
