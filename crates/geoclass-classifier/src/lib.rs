//! Attribute classification of map features
//!
//! A [`Classifier`] maps each feature to a symbol along one or more symbol
//! types (fill color, fill size, outline width, ...). Each axis is described
//! by a [`ClassificationSpec`]: which attribute drives it, which algorithm
//! builds its classes and which symbols the classes are drawn with.
//!
//! # Example
//!
//! ```rust
//! use geoclass_classifier::{Algorithm, ClassificationSpec, Classifier};
//! use geoclass_core::{ClassifierConfig, FeatureId, Rgb, SymbolType};
//!
//! let mut classifier = Classifier::with_config(ClassifierConfig::default().with_seed(7));
//! let spec = ClassificationSpec::graduated(
//!     SymbolType::FillColor,
//!     "population",
//!     vec![Rgb::from_hex("#fee8c8").unwrap(), Rgb::from_hex("#e34a33").unwrap()],
//!     Algorithm::EqualInterval,
//!     3,
//! )
//! .unwrap();
//! let id = classifier.add_classification(spec);
//!
//! for (feature, population) in [(1, 120.0), (2, 5400.0), (3, 880.0)] {
//!     classifier.add_value(feature, SymbolType::FillColor, population);
//! }
//! classifier.calculate_classes(id).unwrap();
//!
//! let symbol = classifier.symbol(&FeatureId::from(2), SymbolType::FillColor);
//! println!("feature 2 is drawn with {:?}", symbol);
//! for entry in classifier.classifications()[0].legend_entries() {
//!     println!("{} -> {}", entry.label, entry.symbol);
//! }
//! ```
//!
//! For whole layers, [`Layer`] registers the attributes of every
//! [`Feature`], honours an exclude [`Query`] and overlays classified
//! symbols on default [`SymbolOptions`].

pub mod classification;
pub mod classifier;
pub mod feature;
pub mod layer;
pub mod legend;
pub mod options;
pub mod query;

pub use classification::{ClassificationSpec, ClassificationSpecBuilder, DEFAULT_CLASS_COUNT};
pub use classifier::{Classification, ClassificationId, Classifier};
pub use feature::{Feature, Record};
pub use layer::Layer;
pub use legend::{Legend, LegendEntry};
pub use options::SymbolOptions;
pub use query::{CompareOp, Query};

// Re-export the types a spec is built from
pub use geoclass_breaks::{Algorithm, SymbolClass, SymbolRange};
