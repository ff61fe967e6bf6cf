//! End-to-end classification scenarios

mod common;

use common::{fid, is_reddish, seeded_classifier, BLUE, RED};
use geoclass_classifier::{Algorithm, ClassificationSpec};
use geoclass_breaks::ClassRange;
use geoclass_core::{AttributeValue, SymbolType, SymbolValue};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_equal_interval_red_to_blue() {
    let mut classifier = seeded_classifier(1);
    let spec = ClassificationSpec::graduated(
        SymbolType::FillColor,
        "value",
        vec![RED, BLUE],
        Algorithm::EqualInterval,
        2,
    )
    .unwrap();
    let id = classifier.add_classification(spec);
    for value in 1..=10 {
        classifier.add_value(value, SymbolType::FillColor, value);
    }
    classifier.calculate_classes(id).unwrap();

    let classes = classifier.classifications()[0].classes().unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].range, ClassRange::Value { min: 1.0, max: 5.5 });
    assert_eq!(classes[1].range, ClassRange::Value { min: 5.5, max: 10.0 });

    let low = classifier.symbol(&fid(3), SymbolType::FillColor).unwrap();
    let high = classifier.symbol(&fid(8), SymbolType::FillColor).unwrap();
    assert!(is_reddish(low.as_color().unwrap()));
    assert!(!is_reddish(high.as_color().unwrap()));
    assert_eq!(*low, SymbolValue::Color(RED));
    assert_eq!(*high, SymbolValue::Color(BLUE));
}

#[test]
fn test_categorical_colors_follow_categories() {
    let mut classifier = seeded_classifier(2);
    let id = classifier.add_classification(ClassificationSpec::categorical(SymbolType::FillColor, "kind").unwrap());
    for (feature, kind) in ["a", "a", "b", "c", "c", "c"].into_iter().enumerate() {
        classifier.add_value(feature, SymbolType::FillColor, kind);
    }
    classifier.calculate_classes(id).unwrap();

    let classes = classifier.classifications()[0].classes().unwrap();
    assert_eq!(classes.len(), 3);
    let labels: Vec<String> = classes.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["a", "b", "c"]);
    assert_ne!(classes[0].symbol, classes[1].symbol);
    assert_ne!(classes[0].symbol, classes[2].symbol);
    assert_ne!(classes[1].symbol, classes[2].symbol);

    let symbol = |f: i64| classifier.symbol(&fid(f), SymbolType::FillColor).copied();
    assert_eq!(symbol(0), symbol(1));
    assert_ne!(symbol(0), symbol(5));
    assert_eq!(symbol(3), symbol(5));
    assert_eq!(symbol(2), Some(classes[1].symbol));
}

#[test]
fn test_equal_count_splits_by_rank() {
    let mut classifier = seeded_classifier(3);
    let spec = ClassificationSpec::graduated(
        SymbolType::FillSize,
        "value",
        vec![1.0, 3.0],
        Algorithm::EqualCount,
        3,
    )
    .unwrap();
    let id = classifier.add_classification(spec);
    for (feature, value) in [5, 3, 1, 4, 1, 5, 9, 2, 6].into_iter().enumerate() {
        classifier.add_value(feature, SymbolType::FillSize, value);
    }
    classifier.calculate_classes(id).unwrap();

    let sorted: Vec<f64> = classifier
        .sorted_values()
        .iter()
        .map(|(_, v)| v.as_number().unwrap())
        .collect();
    assert_eq!(sorted, [1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 9.0]);

    let classes = classifier.classifications()[0].classes().unwrap();
    assert_eq!(classes[0].range, ClassRange::Rank { first: 0, last: 2 });
    assert_eq!(classes[1].range, ClassRange::Rank { first: 3, last: 5 });
    assert_eq!(classes[2].range, ClassRange::Rank { first: 6, last: 8 });

    // by rank: both 1s share the first class, the two 5s are split
    let size = |f: i64| classifier.symbol(&fid(f), SymbolType::FillSize).and_then(|s| s.as_size());
    assert_eq!(size(2), Some(1.0));
    assert_eq!(size(4), Some(1.0));
    assert_eq!(size(7), Some(1.0));
    assert_eq!(size(1), Some(2.0));
    assert_eq!(size(0), Some(2.0));
    assert_eq!(size(5), Some(3.0));
    assert_eq!(size(6), Some(3.0));

    assert_eq!(classes[1].membership_max, AttributeValue::number(5.0));
    assert_eq!(classes[2].membership_min, AttributeValue::number(5.0));
}

#[test]
fn test_natural_breaks_on_large_input_keeps_extremes() {
    let mut rng = ChaCha8Rng::seed_from_u64(2000);
    let values: Vec<f64> = (0..2000).map(|_| rng.gen_range(0.0..1000.0)).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut classifier = seeded_classifier(4);
    let spec = ClassificationSpec::graduated(
        SymbolType::FillSize,
        "value",
        vec![0.5, 2.0],
        Algorithm::NaturalBreaks,
        4,
    )
    .unwrap();
    let id = classifier.add_classification(spec);
    for (feature, value) in values.iter().enumerate() {
        classifier.add_value(feature, SymbolType::FillSize, *value);
    }
    classifier.calculate_classes(id).unwrap();

    let classes = classifier.classifications()[0].classes().unwrap();
    assert_eq!(classes.len(), 4);
    assert_eq!(classes[0].membership_min, AttributeValue::number(min));
    assert_eq!(classes[3].membership_max, AttributeValue::number(max));
    for feature in 0..2000 {
        assert!(classifier.symbol(&fid(feature), SymbolType::FillSize).is_some());
    }
}

#[test]
fn test_excluded_feature_has_no_symbol() {
    let mut classifier = seeded_classifier(5);
    let spec = ClassificationSpec::builder(SymbolType::FillColor, "value")
        .symbol_range(vec![RED, BLUE])
        .algorithm(Algorithm::EqualInterval)
        .class_count(3)
        .exclude(-9999)
        .build()
        .unwrap();
    let id = classifier.add_classification(spec);
    classifier.add_value(42, SymbolType::FillColor, -9999);
    for feature in 0..5 {
        classifier.add_value(feature, SymbolType::FillColor, feature * 10);
    }
    classifier.calculate_classes(id).unwrap();

    assert_eq!(classifier.symbol(&fid(42), SymbolType::FillColor), None);
    assert!(classifier.symbol(&fid(0), SymbolType::FillColor).is_some());
    assert_eq!(classifier.sorted_values().len(), 5);
    // -9999 would otherwise have stretched the first class
    let classes = classifier.classifications()[0].classes().unwrap();
    assert_eq!(classes[0].membership_min, AttributeValue::number(0.0));
}
