use thiserror::Error;

/// Why a listing-index page could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("Page {page} returned HTTP {status}")]
    Status { page: u32, status: u16 },

    #[error("Page {page} transport error: {message}")]
    Transport { page: u32, message: String },
}

