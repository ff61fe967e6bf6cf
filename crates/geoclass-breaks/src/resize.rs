//! Symbol-range resizing
//!
//! Users describe a gradient with a handful of anchor symbols (say a light
//! and a dark color, or a smallest and largest circle size). Before classes
//! are built, that range is stretched or shrunk to exactly one symbol per
//! class. Output position `i` of `n` maps to the fractional input index
//! `i / (n - 1) * (len - 1)` and takes the interpolation between the two
//! bracketing anchors. The first and last anchors are always kept as-is.

use geoclass_core::{Error, Result, Rgb, SymbolValue};
use serde::{Deserialize, Serialize};

/// Values that can be blended between two anchors
pub trait Interpolate: Clone {
    /// Value at fraction `t` (in [0, 1)) of the way from `self` to `other`
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Rgb {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Rgb::interpolate(self, other, t)
    }
}

/// Text has no in-between values: the nearest anchor is copied
impl Interpolate for String {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        if t < 0.5 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

/// Resize `values` to exactly `target` entries
///
/// Returns the input unchanged when it already has `target` entries. A
/// target of one yields just the first anchor.
pub fn resize<V: Interpolate>(values: &[V], target: usize) -> Result<Vec<V>> {
    if values.len() < 2 {
        return Err(Error::invalid_argument(format!(
            "symbol range needs at least 2 values, got {}",
            values.len()
        )));
    }
    if target < 1 {
        return Err(Error::invalid_class_count(target));
    }
    if target == values.len() {
        return Ok(values.to_vec());
    }
    if target == 1 {
        return Ok(vec![values[0].clone()]);
    }

    let last = target - 1;
    let span = (values.len() - 1) as f64;
    let mut resized = Vec::with_capacity(target);
    resized.push(values[0].clone());
    for i in 1..last {
        let position = i as f64 / last as f64 * span;
        let base = (position.floor() as usize).min(values.len() - 2);
        let fraction = position - base as f64;
        resized.push(values[base].interpolate(&values[base + 1], fraction));
    }
    resized.push(values[values.len() - 1].clone());

    Ok(resized)
}

/// The anchor symbols of a classification: all sizes or all colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbolRange {
    Sizes(Vec<f64>),
    Colors(Vec<Rgb>),
}

impl SymbolRange {
    /// Build a color range from hex strings
    pub fn from_hex<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        colors
            .into_iter()
            .map(|c| Rgb::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(SymbolRange::Colors)
    }

    pub fn len(&self) -> usize {
        match self {
            SymbolRange::Sizes(v) => v.len(),
            SymbolRange::Colors(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_color(&self) -> bool {
        matches!(self, SymbolRange::Colors(_))
    }

    /// One symbol per class, interpolated from the anchors
    pub fn resize(&self, class_count: usize) -> Result<Vec<SymbolValue>> {
        Ok(match self {
            SymbolRange::Sizes(v) => resize(v, class_count)?
                .into_iter()
                .map(SymbolValue::Size)
                .collect(),
            SymbolRange::Colors(v) => resize(v, class_count)?
                .into_iter()
                .map(SymbolValue::Color)
                .collect(),
        })
    }
}

impl From<Vec<f64>> for SymbolRange {
    fn from(sizes: Vec<f64>) -> Self {
        SymbolRange::Sizes(sizes)
    }
}

impl From<Vec<Rgb>> for SymbolRange {
    fn from(colors: Vec<Rgb>) -> Self {
        SymbolRange::Colors(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_identity() {
        let values = vec![1.0, 4.0, 56.0, 7.0, 99.0];
        assert_eq!(resize(&values, 5).unwrap(), values);
    }

    #[test]
    fn test_expand_numbers() {
        let resized = resize(&[0.0, 10.0], 5).unwrap();
        assert_eq!(resized.len(), 5);
        for (got, want) in resized.iter().zip([0.0, 2.5, 5.0, 7.5, 10.0]) {
            assert_relative_eq!(*got, want);
        }
    }

    #[test]
    fn test_expand_between_interior_anchors() {
        // positions 0, 0.5, 1.0, 1.5, 2.0 over anchors [0, 10, 30]
        let resized = resize(&[0.0, 10.0, 30.0], 5).unwrap();
        for (got, want) in resized.iter().zip([0.0, 5.0, 10.0, 20.0, 30.0]) {
            assert_relative_eq!(*got, want);
        }
    }

    #[test]
    fn test_shrink_numbers() {
        let resized = resize(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(resized, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_single_target() {
        assert_eq!(resize(&[3.0, 9.0], 1).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_text_copies_nearest() {
        let values: Vec<String> = ["low", "high"].iter().map(|s| s.to_string()).collect();
        let resized = resize(&values, 4).unwrap();
        assert_eq!(resized, vec!["low", "low", "high", "high"]);
    }

    #[test]
    fn test_color_gradient_endpoints() {
        let range = SymbolRange::from_hex(["#ff0000", "#0000ff"]).unwrap();
        let symbols = range.resize(4).unwrap();
        assert_eq!(symbols.len(), 4);
        assert_eq!(symbols[0], SymbolValue::Color(Rgb::new(255, 0, 0)));
        assert_eq!(symbols[3], SymbolValue::Color(Rgb::new(0, 0, 255)));
        // red -> blue takes the short way round through magenta
        let second = symbols[1].as_color().unwrap();
        assert!(second.r > second.g && second.b > second.g);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(resize(&[1.0], 3), Err(Error::InvalidArgument(_))));
        assert!(matches!(resize::<f64>(&[], 3), Err(Error::InvalidArgument(_))));
        assert!(matches!(resize(&[1.0, 2.0], 0), Err(Error::InvalidArgument(_))));
        assert!(SymbolRange::from_hex(["#ff0000", "blue"]).is_err());
    }

    #[test]
    fn test_serde_untagged() {
        let sizes: SymbolRange = serde_json::from_str("[0.5, 2.0]").unwrap();
        assert_eq!(sizes, SymbolRange::Sizes(vec![0.5, 2.0]));
        let colors: SymbolRange = serde_json::from_str(r##"["#ffffff", "#000000"]"##).unwrap();
        assert!(colors.is_color());
    }

    proptest! {
        #[test]
        fn prop_identity(values in prop::collection::vec(-1e6f64..1e6, 2..20)) {
            prop_assert_eq!(resize(&values, values.len()).unwrap(), values);
        }

        #[test]
        fn prop_numeric_endpoints(values in prop::collection::vec(-1e6f64..1e6, 2..10), target in 2usize..40) {
            let resized = resize(&values, target).unwrap();
            prop_assert_eq!(resized.len(), target);
            prop_assert_eq!(resized[0], values[0]);
            prop_assert_eq!(resized[target - 1], values[values.len() - 1]);
        }

        #[test]
        fn prop_color_endpoints(
            anchors in prop::collection::vec((any::<u8>(), any::<u8>(), any::<u8>()), 2..6),
            target in 2usize..20,
        ) {
            let colors: Vec<Rgb> = anchors.iter().map(|&(r, g, b)| Rgb::new(r, g, b)).collect();
            let resized = resize(&colors, target).unwrap();
            prop_assert_eq!(resized[0], colors[0]);
            prop_assert_eq!(resized[target - 1], colors[colors.len() - 1]);
        }
    }
}
