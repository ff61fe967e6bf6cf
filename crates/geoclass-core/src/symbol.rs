//! Symbol channels and symbol values
//!
//! A [`SymbolType`] names one visual channel of a rendered feature. Each
//! channel is either color-valued or size-valued, and a [`SymbolMap`] stores
//! at most one entry per channel in a fixed-size table.

use crate::color::Rgb;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual channel targeted by a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    FillColor,
    FillSize,
    FillWidth,
    FillHeight,
    OutlineColor,
    OutlineWidth,
}

impl SymbolType {
    /// All symbol types, in table order
    pub const ALL: [SymbolType; 6] = [
        SymbolType::FillColor,
        SymbolType::FillSize,
        SymbolType::FillWidth,
        SymbolType::FillHeight,
        SymbolType::OutlineColor,
        SymbolType::OutlineWidth,
    ];

    /// Number of symbol types
    pub const COUNT: usize = Self::ALL.len();

    /// Whether this channel takes color values
    pub fn is_color(self) -> bool {
        matches!(self, SymbolType::FillColor | SymbolType::OutlineColor)
    }

    /// Position of this channel in a [`SymbolMap`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used by map styling options
    pub fn name(self) -> &'static str {
        match self {
            SymbolType::FillColor => "fillcolor",
            SymbolType::FillSize => "fillsize",
            SymbolType::FillWidth => "fillwidth",
            SymbolType::FillHeight => "fillheight",
            SymbolType::OutlineColor => "outlinecolor",
            SymbolType::OutlineWidth => "outlinewidth",
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SymbolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        SymbolType::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("unknown symbol type '{s}'")))
    }
}

/// A resolved symbol: a color or a numeric size/width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymbolValue {
    Color(Rgb),
    Size(f64),
}

impl SymbolValue {
    /// The color, if this is a color symbol
    pub fn as_color(&self) -> Option<Rgb> {
        match self {
            SymbolValue::Color(c) => Some(*c),
            SymbolValue::Size(_) => None,
        }
    }

    /// The size, if this is a numeric symbol
    pub fn as_size(&self) -> Option<f64> {
        match self {
            SymbolValue::Color(_) => None,
            SymbolValue::Size(s) => Some(*s),
        }
    }

    /// Whether this symbol may be assigned to the given channel
    pub fn fits(&self, symbol_type: SymbolType) -> bool {
        self.as_color().is_some() == symbol_type.is_color()
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolValue::Color(c) => write!(f, "{c}"),
            SymbolValue::Size(s) => write!(f, "{s}"),
        }
    }
}

impl From<Rgb> for SymbolValue {
    fn from(color: Rgb) -> Self {
        SymbolValue::Color(color)
    }
}

impl From<f64> for SymbolValue {
    fn from(size: f64) -> Self {
        SymbolValue::Size(size)
    }
}

/// Fixed-size table with one optional slot per [`SymbolType`]
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMap<T> {
    slots: [Option<T>; SymbolType::COUNT],
}

impl<T> SymbolMap<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Get the entry for a channel
    pub fn get(&self, symbol_type: SymbolType) -> Option<&T> {
        self.slots[symbol_type.index()].as_ref()
    }

    /// Set the entry for a channel, returning the previous one
    pub fn insert(&mut self, symbol_type: SymbolType, value: T) -> Option<T> {
        self.slots[symbol_type.index()].replace(value)
    }

    /// Clear the entry for a channel
    pub fn remove(&mut self, symbol_type: SymbolType) -> Option<T> {
        self.slots[symbol_type.index()].take()
    }

    /// Whether a channel has an entry
    pub fn contains(&self, symbol_type: SymbolType) -> bool {
        self.slots[symbol_type.index()].is_some()
    }

    /// Whether no channel has an entry
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of channels with an entry
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate over the populated channels in table order
    pub fn iter(&self) -> impl Iterator<Item = (SymbolType, &T)> {
        SymbolType::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(t, slot)| slot.as_ref().map(|v| (t, v)))
    }
}

impl<T> Default for SymbolMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_type_names_round_trip() {
        for t in SymbolType::ALL {
            assert_eq!(t.name().parse::<SymbolType>().unwrap(), t);
        }
        assert_eq!("fill_color".parse::<SymbolType>().unwrap(), SymbolType::FillColor);
        assert_eq!("OutlineWidth".parse::<SymbolType>().unwrap(), SymbolType::OutlineWidth);
        assert!("fillopacity".parse::<SymbolType>().is_err());
    }

    #[test]
    fn test_color_channels() {
        let colors: Vec<SymbolType> = SymbolType::ALL.into_iter().filter(|t| t.is_color()).collect();
        assert_eq!(colors, vec![SymbolType::FillColor, SymbolType::OutlineColor]);
    }

    #[test]
    fn test_symbol_value_fits() {
        let red = SymbolValue::Color(Rgb::new(255, 0, 0));
        assert!(red.fits(SymbolType::FillColor));
        assert!(!red.fits(SymbolType::FillSize));
        assert!(SymbolValue::Size(2.0).fits(SymbolType::OutlineWidth));
    }

    #[test]
    fn test_symbol_map() {
        let mut map = SymbolMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(SymbolType::FillSize, 1.0), None);
        assert_eq!(map.insert(SymbolType::FillSize, 2.0), Some(1.0));
        map.insert(SymbolType::OutlineWidth, 0.5);

        assert_eq!(map.get(SymbolType::FillSize), Some(&2.0));
        assert_eq!(map.get(SymbolType::FillColor), None);
        assert_eq!(map.len(), 2);

        let entries: Vec<_> = map.iter().map(|(t, v)| (t, *v)).collect();
        assert_eq!(
            entries,
            vec![(SymbolType::FillSize, 2.0), (SymbolType::OutlineWidth, 0.5)]
        );

        assert_eq!(map.remove(SymbolType::FillSize), Some(2.0));
        assert!(!map.contains(SymbolType::FillSize));
    }
}
