// crawl.rs
use crate::config::CrawlConfig;
use crate::db::connection::Database;
use crate::db::properties::{count_listings, insert_listing};
use crate::domain::listing::RawListing;
use crate::errors::AppError;
use crate::scraper::extract::extract_page;
use crate::scraper::html::Document;
use crate::scraper::{PageSource, SuumoScraper};
use std::fmt;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every page up to `page_limit` was processed.
    PageLimit,
    /// `stop_on_empty_page` was set and this page had no listings.
    EmptyPage(u32),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::PageLimit => write!(f, "page limit reached"),
            StopReason::EmptyPage(page) => write!(f, "page {page} had no listings"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_fetched: u32,
    pub listings_saved: usize,
    pub stop: StopReason,
}

/// Opens the store, crawls, and releases the store on every exit path.
pub fn run_crawl(config: &CrawlConfig) -> Result<CrawlSummary, AppError> {
    config.validate()?;

    let mut db = Database::open(&config.db_path)?;
    db.ensure_schema()?;

    let scraper = SuumoScraper::new(config)?;

    // On error `db` is dropped here, which closes the connection.
    let summary = crawl(&scraper, config, |listing| {
        let id = insert_listing(&mut db, &listing)?;
        debug!(
            id,
            price = %listing.price_text,
            area = %listing.area_text,
            year_built = %listing.year_built_text,
            station_distance = %listing.station_distance_text,
            "Saved listing"
        );
        Ok(())
    })?;

    let stored = count_listings(&db)?;
    info!(stored, "Listings now in store");
    db.close()?;
    Ok(summary)
}

/// Walks pages `1..=page_limit` in order, handing each listing to
/// `on_listing` as soon as it is extracted.
///
/// A failed fetch stops the crawl; listings already handed over stay handed
/// over. Pages are fetched strictly one at a time with `request_delay` between
/// them.
pub fn crawl<S, F>(
    source: &S,
    config: &CrawlConfig,
    mut on_listing: F,
) -> Result<CrawlSummary, AppError>
where
    S: PageSource,
    F: FnMut(RawListing) -> Result<(), AppError>,
{
    let delay = config.request_delay()?;
    let mut pages_fetched = 0;
    let mut listings_saved = 0;
    let mut stop = StopReason::PageLimit;

    for page in 1..=config.page_limit {
        let html = match source.fetch_page(page) {
            Ok(html) => html,
            Err(failure) => {
                error!(
                    page,
                    listings_saved,
                    error = %failure,
                    "Fetch failed, stopping crawl"
                );
                return Err(failure.into());
            }
        };
        pages_fetched += 1;

        let listings = {
            let document = Document::parse(&html);
            extract_page(&document.root())
        };
        info!(page, listings = listings.len(), "Page parsed");

        let empty = listings.is_empty();
        for listing in listings {
            let gaps = listing.gaps();
            if !gaps.is_empty() {
                debug!(page, ?gaps, "Listing missing fields");
            }
            if let Err(e) = on_listing(listing) {
                error!(
                    page,
                    listings_saved,
                    error = %e,
                    "Saving listing failed, stopping crawl"
                );
                return Err(AppError::SaveFailed {
                    page,
                    source: Box::new(e),
                });
            }
            listings_saved += 1;
        }

        if empty && config.stop_on_empty_page {
            stop = StopReason::EmptyPage(page);
            break;
        }

        if page < config.page_limit && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    info!(
        pages = pages_fetched,
        listings = listings_saved,
        stop = %stop,
        "Crawl complete"
    );

    Ok(CrawlSummary {
        pages_fetched,
        listings_saved,
        stop,
    })
}
