pub mod crawl;
pub mod extract;
pub mod html;
mod scraper;
mod scraper_error;

pub use crawl::{crawl, run_crawl, CrawlSummary, StopReason};
pub use self::scraper::{page_url, PageSource, SuumoScraper};
pub use scraper_error::FetchFailure;
