// src/domain/listing.rs

use serde::Serialize;

/// Stored in place of any field the listing markup did not provide.
pub const SENTINEL: &str = "N/A";

/// One listing exactly as scraped. Every field is raw text; conversion is
/// left to the normalizer.
///
/// There is no natural key tying a listing to a real-world property, so the
/// same flat can be stored more than once across crawl runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub price_text: String,
    pub area_text: String,
    pub year_built_text: String,
    pub station_distance_text: String,
}

impl RawListing {
    /// Names of the fields that hold the sentinel.
    pub fn gaps(&self) -> Vec<&'static str> {
        [
            ("price", &self.price_text),
            ("area", &self.area_text),
            ("year_built", &self.year_built_text),
            ("station_distance", &self.station_distance_text),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_str() == SENTINEL)
        .map(|(name, _)| name)
        .collect()
    }
}

/// A persisted row: the raw listing plus its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredListing {
    pub id: i64,
    pub raw: RawListing,
}

/// Numeric view of a stored listing, rebuilt on every analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedListing {
    pub id: i64,
    /// Currency units (yen).
    pub price: f64,
    /// Square metres.
    pub area: f64,
    pub year_built_text: String,
    /// Walking minutes; `None` when the text carried no digits.
    pub station_distance: Option<u32>,
    /// `None` when area is zero.
    pub price_per_area: Option<f64>,
}
