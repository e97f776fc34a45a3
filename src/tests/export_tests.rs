use crate::domain::listing::NormalizedListing;
use crate::spreadsheets::export_listings_xlsx;

#[test]
fn writes_workbook_with_gaps_left_empty() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("listings.xlsx");

    let listings = vec![
        NormalizedListing {
            id: 1,
            price: 98000.0,
            area: 25.5,
            year_built_text: "5年".into(),
            station_distance: Some(5),
            price_per_area: Some(98000.0 / 25.5),
        },
        NormalizedListing {
            id: 2,
            price: 70000.0,
            area: 0.0,
            year_built_text: "N/A".into(),
            station_distance: None,
            price_per_area: None,
        },
    ];

    export_listings_xlsx(&listings, &out).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    // xlsx is a zip container.
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn unwritable_path_is_an_export_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("listings.xlsx");

    let err = export_listings_xlsx(&[], &out).unwrap_err();
    assert!(matches!(err, crate::errors::AppError::Export(_)));
}
