use crate::config::CrawlConfig;
use crate::db::connection::Database;
use crate::db::properties::insert_listing;
use crate::domain::listing::{RawListing, StoredListing};
use std::path::PathBuf;
use tempfile::TempDir;

/// A fresh on-disk database in its own temp dir. Keep the `TempDir` alive for
/// as long as the file is needed.
pub fn temp_db() -> (TempDir, PathBuf, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("listings.sqlite");
    let db = Database::open(&path).expect("open db");
    db.ensure_schema().expect("apply schema");
    (dir, path, db)
}

pub fn memory_db() -> Database {
    let db = Database::open_in_memory().expect("open in-memory db");
    db.ensure_schema().expect("apply schema");
    db
}

/// Crawl settings with no pacing, so tests run instantly.
pub fn test_config(base_url: &str, page_limit: u32) -> CrawlConfig {
    CrawlConfig {
        base_url: base_url.to_string(),
        page_limit,
        request_delay_seconds: 0.0,
        request_timeout_seconds: 5,
        ..Default::default()
    }
}

/// Markup for one listing container. `None` leaves that element out.
pub fn listing_html(
    price: Option<&str>,
    area: Option<&str>,
    detail: Option<&str>,
    detail_text: Option<&str>,
) -> String {
    let mut inner = String::new();
    if let Some(detail) = detail {
        inner.push_str(&format!(
            r#"<div class="cassetteitem_detail"><span class="cassetteitem_detail-col3">{detail}</span></div>"#
        ));
    }
    if let Some(text) = detail_text {
        inner.push_str(&format!(r#"<div class="cassetteitem_detail-text">{text}</div>"#));
    }
    inner.push_str("<ul>");
    if let Some(price) = price {
        inner.push_str(&format!(
            r#"<li><span class="cassetteitem_price cassetteitem_price--rent"><span>{price}</span></span></li>"#
        ));
    }
    if let Some(area) = area {
        inner.push_str(&format!(r#"<li><span class="cassetteitem_menseki">{area}</span></li>"#));
    }
    inner.push_str("</ul>");

    format!(r#"<div class="cassetteitem">{inner}</div>"#)
}

pub fn full_listing(price: &str) -> String {
    listing_html(Some(price), Some("25.5m²"), Some("築5年"), Some("徒歩5分"))
}

/// A listing-index page wrapping the given containers.
pub fn page_html(listings: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>listings</title></head><body><div id="js-bukkenList">{}</div></body></html>"#,
        listings.concat()
    )
}

pub fn page_with(count: usize) -> String {
    let listings: Vec<String> = (0..count)
        .map(|i| full_listing(&format!("{}万円", 8 + i)))
        .collect();
    page_html(&listings)
}

pub fn raw(price: &str, area: &str, year_built: &str, station: &str) -> RawListing {
    RawListing {
        price_text: price.to_string(),
        area_text: area.to_string(),
        year_built_text: year_built.to_string(),
        station_distance_text: station.to_string(),
    }
}

pub fn stored(id: i64, price: &str, area: &str, station: &str) -> StoredListing {
    StoredListing {
        id,
        raw: raw(price, area, "5年", station),
    }
}

/// Stores `(price, area, station)` rows with a fixed year.
pub fn insert_rows(db: &mut Database, rows: &[(&str, &str, &str)]) {
    for (price, area, station) in rows {
        insert_listing(db, &raw(price, area, "5年", station)).expect("insert listing");
    }
}
