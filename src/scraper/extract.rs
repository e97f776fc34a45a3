use crate::domain::listing::{RawListing, SENTINEL};
use crate::scraper::html::Markup;

pub const LISTING_SELECTOR: &str = "div.cassetteitem";
const PRICE_SELECTOR: &str = "span.cassetteitem_price";
const AREA_SELECTOR: &str = "span.cassetteitem_menseki";
const DETAIL_SELECTOR: &str = "div.cassetteitem_detail";
const DETAIL_TEXT_SELECTOR: &str = "div.cassetteitem_detail-text";

const AREA_UNIT: &str = "m²";
const BUILT_MARKER: &str = "築";
const WALK_MARKER: &str = "徒歩";
const MINUTES_MARKER: &str = "分";

/// Extracts every listing container on a page, in document order.
pub fn extract_page<M: Markup>(page: &M) -> Vec<RawListing> {
    page.select_all(LISTING_SELECTOR)
        .iter()
        .map(extract_listing)
        .collect()
}

/// Pulls the four raw fields out of one listing container.
///
/// Each field is looked up on its own; a missing element only costs that
/// field, which falls back to the sentinel.
pub fn extract_listing<M: Markup>(listing: &M) -> RawListing {
    let price_text = listing.select_first(PRICE_SELECTOR);

    let area_text = listing
        .select_first(AREA_SELECTOR)
        .map(|text| text.replace(AREA_UNIT, ""));

    let year_built_text = listing
        .select_first(DETAIL_SELECTOR)
        .and_then(|text| {
            text.split_once(BUILT_MARKER)
                .map(|(_, after)| after.to_string())
        });

    let station_distance_text = listing
        .select_first(DETAIL_TEXT_SELECTOR)
        .map(|text| text.replace(WALK_MARKER, "").replace(MINUTES_MARKER, ""));

    RawListing {
        price_text: or_sentinel(price_text),
        area_text: or_sentinel(area_text),
        year_built_text: or_sentinel(year_built_text),
        station_distance_text: or_sentinel(station_distance_text),
    }
}

fn or_sentinel(value: Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => SENTINEL.to_string(),
    }
}
