// src/domain/normalize.rs

use crate::domain::listing::{NormalizedListing, StoredListing};
use crate::errors::AppError;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

/// Currency markers and their scale, longest first so `万円` wins over `円`.
const PRICE_UNITS: [(&str, f64); 2] = [("万円", 10_000.0), ("円", 1.0)];

/// Spellings of square metres seen on listing pages.
const AREA_UNITS: [&str; 3] = ["m²", "㎡", "m2"];

const THOUSANDS_SEPARATOR: char = ',';

/// ASCII and full-width digits; listing text uses both.
fn digit_run() -> Option<&'static Regex> {
    static DIGITS: OnceLock<Option<Regex>> = OnceLock::new();
    DIGITS
        .get_or_init(|| Regex::new(r"[0-9０-９]+").ok())
        .as_ref()
}

/// Converts every stored listing, failing on the first record whose price or
/// area is not numeric. The store is only read, never written.
pub fn normalize_all(listings: &[StoredListing]) -> Result<Vec<NormalizedListing>, AppError> {
    let normalized = listings
        .iter()
        .map(normalize_listing)
        .collect::<Result<Vec<_>, _>>()?;

    info!(listings = normalized.len(), "Normalized listings");
    Ok(normalized)
}

pub fn normalize_listing(listing: &StoredListing) -> Result<NormalizedListing, AppError> {
    let raw = &listing.raw;

    let price = parse_price(&raw.price_text).ok_or_else(|| AppError::MalformedField {
        id: listing.id,
        field: "price",
        value: raw.price_text.clone(),
    })?;

    let area = parse_area(&raw.area_text).ok_or_else(|| AppError::MalformedField {
        id: listing.id,
        field: "area",
        value: raw.area_text.clone(),
    })?;

    Ok(NormalizedListing {
        id: listing.id,
        price,
        area,
        year_built_text: raw.year_built_text.clone(),
        station_distance: parse_station_distance(&raw.station_distance_text),
        price_per_area: price_per_area(price, area),
    })
}

pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    let (number, scale) = PRICE_UNITS
        .iter()
        .find_map(|(marker, scale)| text.strip_suffix(marker).map(|rest| (rest, *scale)))
        .unwrap_or((text, 1.0));

    parse_decimal(number).map(|value| value * scale)
}

pub fn parse_area(text: &str) -> Option<f64> {
    let text = text.trim();
    let number = AREA_UNITS
        .iter()
        .find_map(|unit| text.strip_suffix(unit))
        .unwrap_or(text);

    parse_decimal(number)
}

/// First run of digits anywhere in the text, as minutes. Full-width digits
/// count the same as ASCII ones.
pub fn parse_station_distance(text: &str) -> Option<u32> {
    let run = digit_run()?.find(text)?;
    let ascii: String = run.as_str().chars().map(to_ascii_digit).collect();
    ascii.parse().ok()
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
        _ => c,
    }
}

pub fn price_per_area(price: f64, area: f64) -> Option<f64> {
    if area == 0.0 {
        None
    } else {
        Some(price / area)
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
