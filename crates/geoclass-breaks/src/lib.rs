//! Class breaks and symbol ranges for thematic maps
//!
//! This crate turns a sorted axis of attribute values into an ordered list of
//! [`SymbolClass`]es, each carrying the bounds used to test membership and
//! the symbol its members are drawn with.
//!
//! # Key Features
//!
//! - **Four strategies**: equal interval, equal count (by rank), categorical
//!   and Fisher-Jenks natural breaks
//! - **Symbol ranges**: a few anchor sizes or colors stretched to one symbol
//!   per class, with colors blended in HSL space
//! - **Bounded natural breaks**: large inputs are solved on averaged random
//!   samples, reproducible with a seed
//!
//! # Examples
//!
//! ## Equal Interval with a Color Gradient
//!
//! ```rust
//! use geoclass_breaks::{ClassBuilder, EqualInterval, SymbolRange};
//! use geoclass_core::AttributeValue;
//!
//! let values: Vec<AttributeValue> = (1..=10).map(|v| AttributeValue::from(v)).collect();
//! let symbols = SymbolRange::from_hex(["#ffeda0", "#f03b20"]).unwrap().resize(4).unwrap();
//!
//! let classes = EqualInterval::new(4).build(&values, &symbols).unwrap();
//! for class in &classes {
//!     println!("{class}");
//! }
//! assert_eq!(classes.len(), 4);
//! ```
//!
//! ## Natural Breaks
//!
//! ```rust
//! use geoclass_breaks::jenks_breaks;
//!
//! let data = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 30.0, 31.0, 32.0];
//! let breaks = jenks_breaks(&data, 3).unwrap();
//! assert_eq!(breaks, vec![1.0, 3.0, 12.0, 32.0]);
//! ```

pub mod jenks;
pub mod resize;
pub mod strategies;
pub mod traits;
pub mod types;

// Re-export main types
pub use jenks::{jenks_breaks, jenks_breaks_sampled, natural_breaks};
pub use resize::{resize, Interpolate, SymbolRange};
pub use strategies::{Categorical, EqualCount, EqualInterval, NaturalBreaks};
pub use traits::ClassBuilder;
pub use types::{Algorithm, ClassRange, Membership, SymbolClass};
