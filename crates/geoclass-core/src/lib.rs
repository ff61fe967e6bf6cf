//! Core traits and types for attribute classification
//!
//! This crate provides the vocabulary shared by the classification crates:
//!
//! - [`AttributeValue`] and [`FeatureId`]: what the feature source hands in
//! - [`SymbolType`], [`SymbolValue`] and [`SymbolMap`]: what the renderer reads back
//! - [`Rgb`], [`Hsl`] and [`ColorPalette`]: the color model used for gradients
//!   and categorical colors
//! - [`ClassifierConfig`], [`JenksConfig`] and [`RenderConfig`]: explicit,
//!   immutable configuration
//! - [`Error`] and [`Result`]: the error taxonomy
//!
//! # Example
//!
//! ```rust
//! use geoclass_core::{Rgb, SymbolType, SymbolValue};
//!
//! let red = Rgb::from_hex("#ff0000").unwrap();
//! let blue = Rgb::from_hex("#0000ff").unwrap();
//! let purple = red.interpolate(&blue, 0.5);
//!
//! let symbol = SymbolValue::Color(purple);
//! assert!(symbol.fits(SymbolType::FillColor));
//! println!("midpoint: {}", purple);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod symbol;
pub mod value;

// Re-export core types
pub use color::{random_color, ColorPalette, ColorStyle, Hsl, Rgb};
pub use config::{ClassifierConfig, JenksConfig, MapExtent, RenderConfig};
pub use error::{Error, Result};
pub use symbol::{SymbolMap, SymbolType, SymbolValue};
pub use value::{AttributeValue, FeatureId, ValueKind};
