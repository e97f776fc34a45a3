// src/domain/analysis.rs

use crate::domain::listing::NormalizedListing;
use serde::Serialize;
use std::collections::BTreeMap;

/// Price-per-area statistics for one walking-distance value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBucket {
    pub minutes: u32,
    pub count: usize,
    pub mean_price_per_area: f64,
}

/// How price per square metre relates to walking distance from the station.
///
/// Listings with undefined price-per-area or unknown distance are counted
/// but never enter an average or the correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub listings: usize,
    pub with_known_distance: usize,
    pub undefined_price_per_area: usize,
    pub mean_price_per_area: Option<f64>,
    /// Pearson's r between minutes and price-per-area.
    pub distance_correlation: Option<f64>,
    pub buckets: Vec<DistanceBucket>,
}

pub fn summarize(listings: &[NormalizedListing]) -> Summary {
    let defined: Vec<f64> = listings.iter().filter_map(|l| l.price_per_area).collect();

    let pairs: Vec<(f64, f64)> = listings
        .iter()
        .filter_map(|l| Some((f64::from(l.station_distance?), l.price_per_area?)))
        .collect();

    let mut by_minutes: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for l in listings {
        if let (Some(minutes), Some(ppa)) = (l.station_distance, l.price_per_area) {
            by_minutes.entry(minutes).or_default().push(ppa);
        }
    }

    let buckets = by_minutes
        .into_iter()
        .filter_map(|(minutes, values)| {
            Some(DistanceBucket {
                minutes,
                count: values.len(),
                mean_price_per_area: mean(&values)?,
            })
        })
        .collect();

    Summary {
        listings: listings.len(),
        with_known_distance: listings
            .iter()
            .filter(|l| l.station_distance.is_some())
            .count(),
        undefined_price_per_area: listings.len() - defined.len(),
        mean_price_per_area: mean(&defined),
        distance_correlation: pearson(&pairs),
        buckets,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}
