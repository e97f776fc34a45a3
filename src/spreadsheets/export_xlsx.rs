use crate::domain::listing::NormalizedListing;
use crate::errors::AppError;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

/// Writes normalized listings to a workbook at `path`. Unknown distances and
/// undefined price-per-area are left as empty cells.
pub fn export_listings_xlsx(listings: &[NormalizedListing], path: &Path) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "ID",
        "Price (yen)",
        "Area (m²)",
        "Year Built",
        "Station Distance (min)",
        "Price per m²",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| AppError::Export(format!("Failed to write header '{}': {}", header, e)))?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, listing.id as f64)
            .map_err(|e| AppError::Export(format!("Failed to write id: {}", e)))?;

        worksheet
            .write_number(r, 1, listing.price)
            .map_err(|e| AppError::Export(format!("Failed to write price: {}", e)))?;

        worksheet
            .write_number(r, 2, listing.area)
            .map_err(|e| AppError::Export(format!("Failed to write area: {}", e)))?;

        worksheet
            .write_string(r, 3, &listing.year_built_text)
            .map_err(|e| AppError::Export(format!("Failed to write year built: {}", e)))?;

        if let Some(minutes) = listing.station_distance {
            worksheet
                .write_number(r, 4, f64::from(minutes))
                .map_err(|e| AppError::Export(format!("Failed to write distance: {}", e)))?;
        }

        if let Some(ppa) = listing.price_per_area {
            worksheet
                .write_number(r, 5, ppa)
                .map_err(|e| AppError::Export(format!("Failed to write price per m²: {}", e)))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| AppError::Export(format!("Failed to save workbook: {}", e)))?;

    info!(path = %path.display(), rows = listings.len(), "Exported workbook");
    Ok(())
}
