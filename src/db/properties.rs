use crate::db::connection::Database;
use crate::domain::listing::{RawListing, StoredListing, SENTINEL};
use crate::errors::AppError;
use rusqlite::params;

/// Appends one listing and commits before returning its id.
///
/// Each call is its own transaction, so a crash mid-crawl only loses the row
/// being written. Identical listings are stored again without complaint.
pub fn insert_listing(db: &mut Database, listing: &RawListing) -> Result<i64, AppError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO properties (price, area, year_built, station_distance)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                &listing.price_text,
                &listing.area_text,
                &listing.year_built_text,
                &listing.station_distance_text,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    })
}

/// Loads every stored listing, oldest first.
pub fn load_listings(db: &Database) -> Result<Vec<StoredListing>, AppError> {
    let mut stmt = db.conn().prepare(
        "SELECT id, price, area, year_built, station_distance FROM properties ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(StoredListing {
            id: row.get(0)?,
            raw: RawListing {
                price_text: text_or_sentinel(row.get(1)?),
                area_text: text_or_sentinel(row.get(2)?),
                year_built_text: text_or_sentinel(row.get(3)?),
                station_distance_text: text_or_sentinel(row.get(4)?),
            },
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_listings(db: &Database) -> Result<i64, AppError> {
    let n = db
        .conn()
        .query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))?;
    Ok(n)
}

fn text_or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| SENTINEL.to_string())
}
