// errors.rs
use thiserror::Error;

pub use crate::scraper::FetchFailure;

/// Errors that end a crawl or an analysis run.
///
/// Field-level extraction gaps never show up here: the extractor absorbs them
/// by writing the sentinel into the affected field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    #[error("Database Error: {0}")]
    Persistence(String),

    #[error("Saving listings from page {page} failed: {source}")]
    SaveFailed {
        page: u32,
        #[source]
        source: Box<AppError>,
    },

    #[error("Malformed {field} in record {id}: {value:?}")]
    MalformedField {
        id: i64,
        field: &'static str,
        value: String,
    },

    #[error("Export Error: {0}")]
    Export(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

