use crate::errors::AppError;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://suumo.jp/chintai/tokyo/sc_shinjuku/";
pub const DEFAULT_PAGE_LIMIT: u32 = 5;
pub const DEFAULT_REQUEST_DELAY_SECONDS: f64 = 1.0;
pub const DEFAULT_DB_PATH: &str = "suumo_properties.db";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_REQUEST_DELAY_SECONDS: f64 = 3600.0;

/// Everything a crawl run needs to know.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Listing-index root; pages are requested as `<base_url>?page=<n>`.
    pub base_url: String,
    pub page_limit: u32,
    pub request_delay_seconds: f64,
    pub db_path: PathBuf,
    pub user_agent: String,
    /// Cap on a single page request, so an unresponsive server fails the page
    /// instead of hanging the run.
    pub request_timeout_seconds: u64,
    pub stop_on_empty_page: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            request_delay_seconds: DEFAULT_REQUEST_DELAY_SECONDS,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            stop_on_empty_page: false,
        }
    }
}

impl CrawlConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page_limit == 0 {
            return Err(AppError::Config("page_limit must be at least 1".into()));
        }
        if !(0.0..=MAX_REQUEST_DELAY_SECONDS).contains(&self.request_delay_seconds) {
            return Err(AppError::Config(format!(
                "request_delay_seconds must be between 0 and {MAX_REQUEST_DELAY_SECONDS}, got {}",
                self.request_delay_seconds
            )));
        }
        if self.request_timeout_seconds == 0 {
            return Err(AppError::Config(
                "request_timeout_seconds must be at least 1".into(),
            ));
        }
        Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;
        Ok(())
    }

    pub fn request_delay(&self) -> Result<Duration, AppError> {
        Duration::try_from_secs_f64(self.request_delay_seconds).map_err(|e| {
            AppError::Config(format!(
                "request_delay_seconds {} is not a usable delay: {e}",
                self.request_delay_seconds
            ))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
