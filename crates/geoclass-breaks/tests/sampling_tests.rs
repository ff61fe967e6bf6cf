//! Natural breaks on inputs large enough to be sampled

mod common;

use common::{clustered, sorted_uniform};
use geoclass_breaks::{jenks_breaks, natural_breaks};
use geoclass_core::JenksConfig;

#[test]
fn test_sampled_breaks_pin_global_extremes() {
    let data = sorted_uniform(2000, -20.0, 80.0, 42);
    let breaks = natural_breaks(&data, 4, &JenksConfig::default()).unwrap();

    assert_eq!(breaks.len(), 5);
    assert_eq!(breaks[0], data[0]);
    assert_eq!(breaks[4], data[1999]);
    for pair in breaks.windows(2) {
        assert!(pair[0] <= pair[1], "breaks not ordered: {breaks:?}");
    }
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let data = sorted_uniform(5000, 0.0, 1.0, 1);
    let config = JenksConfig::default().with_seed(2024);
    assert_eq!(
        natural_breaks(&data, 5, &config).unwrap(),
        natural_breaks(&data, 5, &config).unwrap()
    );
}

#[test]
fn test_sampling_finds_separated_clusters() {
    let data = clustered(600, 9);
    let breaks = natural_breaks(&data, 3, &JenksConfig::default().with_seed(3)).unwrap();

    // each interior break sits at the top of a cluster
    assert!((breaks[1] - 1.0).abs() < 1.0, "first break {}", breaks[1]);
    assert!((breaks[2] - 101.0).abs() < 1.0, "second break {}", breaks[2]);
}

#[test]
fn test_threshold_is_exclusive() {
    let data = sorted_uniform(1000, 0.0, 10.0, 5);
    let config = JenksConfig::default();
    assert_eq!(
        natural_breaks(&data, 3, &config).unwrap(),
        jenks_breaks(&data, 3).unwrap()
    );
}
