//! Attribute classification for thematic maps
//!
//! `geoclass` bundles the workspace crates behind one dependency:
//!
//! - [`core`]: values, symbols, colors, configuration and errors
//! - [`breaks`]: symbol-range resizing, natural breaks and class strategies
//! - [`classifier`]: the multi-axis classifier, layers, legends and exclude queries
//!
//! # Example
//!
//! ```rust
//! use geoclass::prelude::*;
//!
//! let mut classifier = Classifier::with_config(ClassifierConfig::default().with_seed(3));
//! let id = classifier.add_classification(
//!     ClassificationSpec::categorical(SymbolType::FillColor, "landuse").unwrap(),
//! );
//! for (feature, landuse) in [(1, "forest"), (2, "urban"), (3, "forest")] {
//!     classifier.add_value(feature, SymbolType::FillColor, landuse);
//! }
//! classifier.calculate_classes(id).unwrap();
//!
//! let forest = classifier.symbol(&FeatureId::from(1), SymbolType::FillColor);
//! assert_eq!(forest, classifier.symbol(&FeatureId::from(3), SymbolType::FillColor));
//! ```

pub use geoclass_breaks as breaks;
pub use geoclass_classifier as classifier;
pub use geoclass_core as core;

pub mod prelude {
    pub use geoclass_breaks::{
        jenks_breaks, natural_breaks, resize, Algorithm, ClassBuilder, ClassRange, SymbolClass, SymbolRange,
    };
    pub use geoclass_classifier::{
        ClassificationId, ClassificationSpec, Classifier, Feature, Layer, Legend, LegendEntry, Query, Record,
        SymbolOptions,
    };
    pub use geoclass_core::{
        AttributeValue, ClassifierConfig, ColorPalette, ColorStyle, Error, FeatureId, JenksConfig, RenderConfig,
        Result, Rgb, SymbolType, SymbolValue,
    };
}
