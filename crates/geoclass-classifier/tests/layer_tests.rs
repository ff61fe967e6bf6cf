//! Layer classification with exclude queries, defaults and legends

mod common;

use common::{fid, BLUE, RED};
use geoclass_classifier::{Algorithm, ClassificationSpec, Layer, Query, Record, SymbolOptions};
use geoclass_core::{ClassifierConfig, FeatureId, Rgb, SymbolType};

fn countries() -> Vec<Record> {
    [
        (0, "Norway", "Europe", 5.4),
        (1, "Chad", "Africa", 17.0),
        (2, "Peru", "America", 33.0),
        (3, "Fiji", "Oceania", 0.9),
        (4, "Mali", "Africa", 21.0),
    ]
    .into_iter()
    .map(|(id, name, region, pop)| {
        Record::new(id)
            .with_attribute("name", name)
            .with_attribute("region", region)
            .with_attribute("pop", pop)
    })
    .collect()
}

fn layer() -> Layer {
    Layer::with_config("countries", ClassifierConfig::default().with_seed(21))
        .with_options(SymbolOptions::new(Rgb::gray(0.5)))
}

#[test]
fn test_classify_and_symbolize() -> anyhow::Result<()> {
    let mut layer = layer();
    layer.add_classification(ClassificationSpec::graduated(
        SymbolType::FillColor,
        "pop",
        vec![RED, BLUE],
        Algorithm::EqualCount,
        2,
    )?);
    layer.add_classification(ClassificationSpec::graduated(
        SymbolType::FillSize,
        "pop",
        vec![0.2, 1.0],
        Algorithm::EqualInterval,
        3,
    )?);
    layer.classify(&countries())?;

    let fiji = layer.symbolize(&fid(3)).expect("fiji is classified");
    assert_eq!(fiji.fill_color, RED);
    assert_eq!(fiji.fill_size, 0.2);
    assert_eq!(fiji.outline_color, Rgb::BLACK);
    assert_eq!(fiji.outline_width, 0.09);

    let peru = layer.symbolize(&fid(2)).expect("peru is classified");
    assert_eq!(peru.fill_color, BLUE);
    assert_eq!(peru.fill_size, 1.0);
    Ok(())
}

#[test]
fn test_exclude_query_skips_features() -> anyhow::Result<()> {
    let mut layer = layer().with_exclude_query(Query::parse("region == 'Africa' or pop < 1")?);
    layer.add_classification(ClassificationSpec::categorical(SymbolType::FillColor, "region")?);
    layer.classify(&countries())?;

    assert!(layer.symbolize(&fid(1)).is_none());
    assert!(layer.symbolize(&fid(3)).is_none());
    assert!(layer.symbolize(&fid(4)).is_none());
    assert!(layer.symbolize(&fid(0)).is_some());
    assert_eq!(layer.classifier().classifications()[0].classes().map(|c| c.len()), Some(2));
    Ok(())
}

#[test]
fn test_missing_attribute_skips_axis() -> anyhow::Result<()> {
    let mut layer = layer();
    layer.add_classification(ClassificationSpec::categorical(SymbolType::FillColor, "region")?);
    layer.add_classification(ClassificationSpec::graduated(
        SymbolType::OutlineWidth,
        "area",
        vec![0.05, 0.3],
        Algorithm::EqualInterval,
        2,
    )?);
    let mut features = countries();
    features[0].set_attribute("area", 385.0);
    features[2].set_attribute("area", 1285.0);
    layer.classify(&features)?;

    let norway = layer.symbolize(&fid(0)).expect("norway is classified");
    assert_eq!(norway.outline_width, 0.05);
    let chad = layer.symbolize(&fid(1)).expect("chad is classified");
    assert_eq!(chad.outline_width, SymbolOptions::DEFAULT_OUTLINE_WIDTH);
    assert!(layer.symbolize(&FeatureId::from("unknown")).is_none());
    Ok(())
}

#[test]
fn test_classify_fails_fast() {
    let mut layer = layer();
    layer.add_classification(
        ClassificationSpec::graduated(SymbolType::FillSize, "name", vec![1.0, 2.0], Algorithm::EqualInterval, 2)
            .unwrap(),
    );
    let color = layer.add_classification(ClassificationSpec::categorical(SymbolType::FillColor, "region").unwrap());

    // names are text, so the size axis cannot be classified
    assert!(layer.classify(&countries()).is_err());
    assert!(!layer.classifier().classification(color).unwrap().is_classified());
}

#[test]
fn test_non_finite_attribute_is_rejected() {
    let mut layer = layer();
    layer.add_classification(
        ClassificationSpec::graduated(SymbolType::FillSize, "pop", vec![0.2, 1.0], Algorithm::NaturalBreaks, 2)
            .unwrap(),
    );
    let mut features = countries();
    features[2].set_attribute("pop", f64::INFINITY);

    assert!(matches!(
        layer.classify(&features),
        Err(geoclass_core::Error::InvalidArgument(_))
    ));
    assert!(layer.symbolize(&fid(0)).is_none());
}

#[test]
fn test_legend() -> anyhow::Result<()> {
    let mut layer = layer();
    let id = layer.add_classification(ClassificationSpec::graduated(
        SymbolType::FillColor,
        "pop",
        vec![RED, BLUE],
        Algorithm::EqualInterval,
        2,
    )?);
    assert!(layer.classifier().classification(id).unwrap().legend().is_none());
    layer.classify(&countries())?;

    let legend = layer.classifier().classification(id).unwrap().legend().expect("classified");
    assert_eq!(legend.value_field, "pop");
    assert_eq!(legend.symbol_type, SymbolType::FillColor);
    let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["0.9 - 16.95", "16.95 - 33"]);

    let json = serde_json::to_value(&legend)?;
    assert_eq!(json["symbol_type"], "fillcolor");
    assert_eq!(json["entries"][0]["symbol"], "#ff0000");
    assert_eq!(json["entries"][1]["max"], 33.0);
    Ok(())
}
