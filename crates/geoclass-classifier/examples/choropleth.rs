//! Classifies a small table of cities into a bubble map and prints what a
//! renderer would draw for each one.
//!
//! Run with `RUST_LOG=debug` to see the classification events.

use geoclass_classifier::{Algorithm, ClassificationSpec, Feature, Layer, Query, Record};
use geoclass_core::{ClassifierConfig, Rgb, RenderConfig, SymbolType};
use tracing_subscriber::EnvFilter;

fn cities() -> Vec<Record> {
    [
        ("Oslo", 10.75, 59.91, 709_000.0, "capital"),
        ("Bergen", 5.32, 60.39, 286_000.0, "port"),
        ("Lagos", 3.38, 6.52, 15_400_000.0, "port"),
        ("Lima", -77.04, -12.05, 10_700_000.0, "capital"),
        ("Perth", 115.86, -31.95, 2_100_000.0, "port"),
        ("Quito", -78.47, -0.18, 2_000_000.0, "capital"),
        ("Osaka", 135.50, 34.69, 19_000_000.0, "port"),
        ("Atlantis", 0.0, 0.0, -1.0, "myth"),
    ]
    .into_iter()
    .map(|(name, lon, lat, pop, kind)| {
        Record::new(name)
            .with_attribute("lon", lon)
            .with_attribute("lat", lat)
            .with_attribute("population", pop)
            .with_attribute("kind", kind)
    })
    .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let render = RenderConfig::new(1200, 600)?.with_background(Some(Rgb::WHITE));
    let mut layer = Layer::with_config("cities", ClassifierConfig::default().with_seed(42))
        .with_exclude_query(Query::parse("kind == 'myth' or population < 0")?);

    layer.add_classification(ClassificationSpec::graduated(
        SymbolType::FillSize,
        "population",
        vec![0.4, 2.5],
        Algorithm::NaturalBreaks,
        3,
    )?);
    layer.add_classification(ClassificationSpec::categorical(SymbolType::FillColor, "kind")?);

    let features = cities();
    layer.classify(&features)?;

    println!("=== Features ===");
    for feature in &features {
        let Some(options) = layer.symbolize(&feature.id()) else {
            println!("{:>10}: not drawn", feature.id().to_string());
            continue;
        };
        let lon = feature.attribute("lon").and_then(|v| v.as_number()).unwrap_or_default();
        let lat = feature.attribute("lat").and_then(|v| v.as_number()).unwrap_or_default();
        let (x, y) = render.to_pixel(lon, lat);
        let radius = render
            .size_to_pixels(SymbolType::FillSize, options.fill_size)
            .unwrap_or_default();
        println!(
            "{:>10}: circle at ({:.0}, {:.0}) radius {:.1}px fill {}",
            feature.id().to_string(),
            x,
            y,
            radius,
            options.fill_color
        );
    }

    println!("\n=== Legend ===");
    for classification in layer.classifier().classifications() {
        let Some(legend) = classification.legend() else {
            continue;
        };
        println!("{} ({})", legend.value_field, legend.symbol_type);
        for entry in &legend.entries {
            println!("  {:<24} {}", entry.label, entry.symbol);
        }
    }

    Ok(())
}
