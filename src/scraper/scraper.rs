// scraper.rs
use crate::config::CrawlConfig;
use crate::errors::AppError;
use crate::scraper::FetchFailure;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::info;
use url::Url;

/// Anything that can hand back the HTML of a numbered listing-index page.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> Result<String, FetchFailure>;
}

/// Fetches listing-index pages over HTTP with a fixed identity header.
///
/// One GET per call and no retries: a failed page is reported to the caller.
pub struct SuumoScraper {
    client: Client,
    base_url: Url,
}

impl SuumoScraper {
    pub fn new(config: &CrawlConfig) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("invalid base_url {:?}: {e}", config.base_url)))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client setup failed: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn page_url(&self, page: u32) -> Url {
        page_url(&self.base_url, page)
    }
}

impl PageSource for SuumoScraper {
    fn fetch_page(&self, page: u32) -> Result<String, FetchFailure> {
        let url = self.page_url(page);
        info!(page, url = %url, "Fetching page");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchFailure::Transport {
                page,
                message: e.to_string(),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchFailure::Status {
                page,
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| FetchFailure::Transport {
            page,
            message: e.to_string(),
        })
    }
}

/// `<base>?page=<n>`, keeping any other query pairs already on `base`.
pub fn page_url(base: &Url, page: u32) -> Url {
    let mut url = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| k != "page")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(kept);
        pairs.append_pair("page", &page.to_string());
    }
    url
}
