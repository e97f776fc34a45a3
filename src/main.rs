use crate::config::{
    CrawlConfig, DEFAULT_BASE_URL, DEFAULT_DB_PATH, DEFAULT_PAGE_LIMIT,
    DEFAULT_REQUEST_DELAY_SECONDS, DEFAULT_REQUEST_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use crate::db::connection::Database;
use crate::db::properties::load_listings;
use crate::domain::analysis::summarize;
use crate::domain::listing::NormalizedListing;
use crate::domain::normalize::normalize_all;
use crate::errors::AppError;
use crate::scraper::run_crawl;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod db;
mod domain;
mod errors;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(
    name = "rent_scraper",
    about = "Rental listing scraper: crawl, normalize and study price per m² against station distance"
)]
struct Cli {
    /// SQLite file holding raw listings
    #[arg(long = "db", global = true, env = "RENT_SCRAPER_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl listing-index pages and store every listing found
    Crawl(CrawlArgs),
    /// Print the normalized listings
    Normalize {
        /// Rows to print (ignored with --json)
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,
        /// Print every row as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Price per m² against walking distance
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Write normalized listings to an .xlsx workbook
    Export {
        /// Output file (default: listings_<timestamp>.xlsx)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CrawlArgs {
    /// Listing-index root; pages are requested as <base-url>?page=<n>
    #[arg(long, env = "RENT_SCRAPER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Max pages to crawl
    #[arg(
        short = 'n',
        long,
        env = "RENT_SCRAPER_PAGE_LIMIT",
        default_value_t = DEFAULT_PAGE_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    page_limit: u32,
    /// Pause between page requests, in seconds
    #[arg(long = "delay", env = "RENT_SCRAPER_DELAY_SECS", default_value_t = DEFAULT_REQUEST_DELAY_SECONDS)]
    request_delay_seconds: f64,
    #[arg(long, env = "RENT_SCRAPER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Per-request timeout, in seconds
    #[arg(long = "timeout", env = "RENT_SCRAPER_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECONDS)]
    request_timeout_seconds: u64,
    /// Stop at the first page with no listings instead of running to the page limit
    #[arg(long, env = "RENT_SCRAPER_STOP_ON_EMPTY_PAGE")]
    stop_on_empty_page: bool,
}

impl CrawlArgs {
    fn into_config(self, db_path: PathBuf) -> CrawlConfig {
        CrawlConfig {
            base_url: self.base_url,
            page_limit: self.page_limit,
            request_delay_seconds: self.request_delay_seconds,
            db_path,
            user_agent: self.user_agent,
            request_timeout_seconds: self.request_timeout_seconds,
            stop_on_empty_page: self.stop_on_empty_page,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl(args) => {
            let config = args.into_config(cli.db_path);
            let summary = run_crawl(&config)?;
            println!(
                "Scraped {} pages, saved {} listings ({}).",
                summary.pages_fetched, summary.listings_saved, summary.stop
            );
        }
        Commands::Normalize { limit, json } => {
            let listings = load_normalized(&cli.db_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&listings)?);
            } else {
                print_table(&listings, limit);
            }
        }
        Commands::Summary { json } => {
            let listings = load_normalized(&cli.db_path)?;
            let summary = summarize(&listings);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Listings:                 {}", summary.listings);
                println!("Known station distance:   {}", summary.with_known_distance);
                println!("Undefined price per m²:   {}", summary.undefined_price_per_area);
                println!("Mean price per m²:        {}", fmt_opt(summary.mean_price_per_area));
                println!("Distance correlation (r): {}", fmt_opt(summary.distance_correlation));
                if !summary.buckets.is_empty() {
                    println!("\n{:>5} | {:>5} | {:>14}", "min", "n", "price/m²");
                    println!("{}", "-".repeat(30));
                    for b in &summary.buckets {
                        println!(
                            "{:>5} | {:>5} | {:>14.2}",
                            b.minutes, b.count, b.mean_price_per_area
                        );
                    }
                }
            }
        }
        Commands::Export { out } => {
            let listings = load_normalized(&cli.db_path)?;
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "listings_{}.xlsx",
                    chrono::Local::now().format("%Y%m%d_%H%M%S")
                ))
            });
            spreadsheets::export_listings_xlsx(&listings, &out)?;
            println!("Wrote {} listings to {}", listings.len(), out.display());
        }
    }

    Ok(())
}

fn load_normalized(db_path: &Path) -> Result<Vec<NormalizedListing>, AppError> {
    let db = Database::open_read_only(db_path)?;
    let stored = load_listings(&db)?;
    db.close()?;
    normalize_all(&stored)
}

fn print_table(listings: &[NormalizedListing], limit: usize) {
    println!(
        "{:>6} | {:>10} | {:>7} | {:<14} | {:>7} | {:>12}",
        "id", "price", "area", "year_built", "station", "price/m²"
    );
    println!("{}", "-".repeat(72));

    for l in listings.iter().take(limit) {
        let station = l
            .station_distance
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:>6} | {:>10.0} | {:>7.2} | {:<14} | {:>7} | {:>12}",
            l.id,
            l.price,
            l.area,
            l.year_built_text,
            station,
            fmt_opt(l.price_per_area)
        );
    }

    println!("\n{} listings", listings.len());
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "undefined".into())
}
