//! Shared utilities for integration tests

#![allow(dead_code)]

use geoclass_classifier::Classifier;
use geoclass_core::{ClassifierConfig, FeatureId, Rgb};

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Classifier whose random choices are fixed by `seed`
pub fn seeded_classifier(seed: u64) -> Classifier {
    Classifier::with_config(ClassifierConfig::default().with_seed(seed))
}

/// Shorthand for integer feature ids
pub fn fid(id: i64) -> FeatureId {
    FeatureId::Index(id)
}

/// Whether `color` leans more to red than to blue
pub fn is_reddish(color: Rgb) -> bool {
    color.r > color.b
}
