use crate::config::CrawlConfig;
use crate::errors::AppError;
use std::time::Duration;

#[test]
fn defaults_are_valid() {
    let config = CrawlConfig::default();
    config.validate().unwrap();

    assert_eq!(config.page_limit, 5);
    assert_eq!(config.request_delay().unwrap(), Duration::from_secs(1));
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert!(!config.stop_on_empty_page);
}

#[test]
fn rejects_out_of_range_values() {
    let bad = [
        CrawlConfig {
            page_limit: 0,
            ..Default::default()
        },
        CrawlConfig {
            request_delay_seconds: -1.0,
            ..Default::default()
        },
        CrawlConfig {
            request_delay_seconds: f64::NAN,
            ..Default::default()
        },
        CrawlConfig {
            request_delay_seconds: 1e30,
            ..Default::default()
        },
        CrawlConfig {
            request_timeout_seconds: 0,
            ..Default::default()
        },
        CrawlConfig {
            base_url: "not a url".into(),
            ..Default::default()
        },
    ];

    for config in bad {
        assert!(
            matches!(config.validate(), Err(AppError::Config(_))),
            "accepted {config:?}"
        );
    }
}

#[test]
fn fractional_delay_is_kept() {
    let config = CrawlConfig {
        request_delay_seconds: 0.25,
        ..Default::default()
    };
    assert_eq!(config.request_delay().unwrap(), Duration::from_millis(250));
}

#[test]
fn oversized_delay_is_an_error_not_a_panic() {
    let config = CrawlConfig {
        request_delay_seconds: 1e30,
        ..Default::default()
    };
    assert!(matches!(config.request_delay(), Err(AppError::Config(_))));
}
