//! Shared utilities for integration tests

#![allow(dead_code)]

use geoclass_core::{AttributeValue, SymbolValue};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Wrap numbers as attribute values
pub fn numbers(values: &[f64]) -> Vec<AttributeValue> {
    values.iter().map(|&v| AttributeValue::number(v)).collect()
}

/// Sizes 1..=count, one per class
pub fn sizes(count: usize) -> Vec<SymbolValue> {
    (1..=count).map(|i| SymbolValue::Size(i as f64)).collect()
}

/// Reproducible uniform data in `[low, high)`, sorted ascending
pub fn sorted_uniform(n: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data: Vec<f64> = (0..n).map(|_| rng.gen_range(low..high)).collect();
    data.sort_by(f64::total_cmp);
    data
}

/// Three well separated clusters of `per_cluster` values each, sorted
pub fn clustered(per_cluster: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(per_cluster * 3);
    for center in [0.0, 100.0, 1000.0] {
        data.extend((0..per_cluster).map(|_| center + rng.gen_range(-1.0..1.0)));
    }
    data.sort_by(f64::total_cmp);
    data
}
