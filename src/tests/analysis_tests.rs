use crate::domain::analysis::summarize;
use crate::domain::listing::NormalizedListing;

fn listing(id: i64, minutes: Option<u32>, price: f64, area: f64) -> NormalizedListing {
    NormalizedListing {
        id,
        price,
        area,
        year_built_text: "5年".into(),
        station_distance: minutes,
        price_per_area: if area == 0.0 { None } else { Some(price / area) },
    }
}

#[test]
fn undefined_price_per_area_stays_out_of_aggregates() {
    let rows = vec![
        listing(1, Some(5), 100_000.0, 20.0),
        listing(2, Some(5), 80_000.0, 0.0),
        listing(3, None, 60_000.0, 20.0),
    ];

    let summary = summarize(&rows);

    assert_eq!(summary.listings, 3);
    assert_eq!(summary.with_known_distance, 2);
    assert_eq!(summary.undefined_price_per_area, 1);
    assert_eq!(summary.mean_price_per_area, Some(4000.0));
    assert!(summary.mean_price_per_area.unwrap().is_finite());
    assert_eq!(summary.buckets.len(), 1);
    assert_eq!(summary.buckets[0].minutes, 5);
    assert_eq!(summary.buckets[0].count, 1);
    assert_eq!(summary.buckets[0].mean_price_per_area, 5000.0);
}

#[test]
fn farther_listings_cheaper_gives_negative_correlation() {
    let rows = vec![
        listing(1, Some(1), 120_000.0, 20.0),
        listing(2, Some(5), 100_000.0, 20.0),
        listing(3, Some(10), 80_000.0, 20.0),
        listing(4, Some(15), 70_000.0, 20.0),
    ];

    let r = summarize(&rows).distance_correlation.unwrap();
    assert!(r < -0.9, "got {r}");
}

#[test]
fn buckets_are_sorted_by_minutes() {
    let rows = vec![
        listing(1, Some(10), 80_000.0, 20.0),
        listing(2, Some(3), 100_000.0, 20.0),
        listing(3, Some(10), 60_000.0, 20.0),
    ];

    let buckets = summarize(&rows).buckets;
    assert_eq!(
        buckets.iter().map(|b| (b.minutes, b.count)).collect::<Vec<_>>(),
        vec![(3, 1), (10, 2)]
    );
    assert_eq!(buckets[1].mean_price_per_area, 3500.0);
}

#[test]
fn correlation_needs_two_varying_pairs() {
    assert_eq!(summarize(&[]).distance_correlation, None);
    assert_eq!(summarize(&[]).mean_price_per_area, None);

    let one = vec![listing(1, Some(5), 100_000.0, 20.0)];
    assert_eq!(summarize(&one).distance_correlation, None);

    let same_distance = vec![
        listing(1, Some(5), 100_000.0, 20.0),
        listing(2, Some(5), 80_000.0, 20.0),
    ];
    assert_eq!(summarize(&same_distance).distance_correlation, None);
}
