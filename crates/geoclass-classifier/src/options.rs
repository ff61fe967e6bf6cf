//! Per-feature drawing options

use geoclass_core::{random_color, ColorStyle, Error, Result, Rgb, SymbolMap, SymbolType, SymbolValue};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The full symbol set a renderer needs to draw one feature
///
/// Sizes and widths are percentages of the map width; fill height is a
/// percentage of the map height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolOptions {
    pub fill_color: Rgb,
    pub fill_size: f64,
    pub fill_width: f64,
    pub fill_height: f64,
    pub outline_color: Rgb,
    pub outline_width: f64,
}

impl SymbolOptions {
    pub const DEFAULT_FILL_SIZE: f64 = 0.4;
    pub const DEFAULT_FILL_WIDTH: f64 = 1.2;
    pub const DEFAULT_FILL_HEIGHT: f64 = 0.8;
    pub const DEFAULT_OUTLINE_WIDTH: f64 = 0.09;

    /// Default options around the given fill color
    pub fn new(fill_color: Rgb) -> Self {
        Self {
            fill_color,
            fill_size: Self::DEFAULT_FILL_SIZE,
            fill_width: Self::DEFAULT_FILL_WIDTH,
            fill_height: Self::DEFAULT_FILL_HEIGHT,
            outline_color: Rgb::BLACK,
            outline_width: Self::DEFAULT_OUTLINE_WIDTH,
        }
    }

    /// Default options with a random fill color
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(random_color(rng, ColorStyle::Standard))
    }

    pub fn get(&self, symbol_type: SymbolType) -> SymbolValue {
        match symbol_type {
            SymbolType::FillColor => SymbolValue::Color(self.fill_color),
            SymbolType::FillSize => SymbolValue::Size(self.fill_size),
            SymbolType::FillWidth => SymbolValue::Size(self.fill_width),
            SymbolType::FillHeight => SymbolValue::Size(self.fill_height),
            SymbolType::OutlineColor => SymbolValue::Color(self.outline_color),
            SymbolType::OutlineWidth => SymbolValue::Size(self.outline_width),
        }
    }

    /// Replace one option; the value must fit the symbol type
    pub fn set(&mut self, symbol_type: SymbolType, value: SymbolValue) -> Result<()> {
        match (symbol_type, value) {
            (SymbolType::FillColor, SymbolValue::Color(c)) => self.fill_color = c,
            (SymbolType::OutlineColor, SymbolValue::Color(c)) => self.outline_color = c,
            (SymbolType::FillSize, SymbolValue::Size(s)) => self.fill_size = s,
            (SymbolType::FillWidth, SymbolValue::Size(s)) => self.fill_width = s,
            (SymbolType::FillHeight, SymbolValue::Size(s)) => self.fill_height = s,
            (SymbolType::OutlineWidth, SymbolValue::Size(s)) => self.outline_width = s,
            (symbol_type, value) => {
                return Err(Error::invalid_argument(format!(
                    "symbol {value} does not fit {symbol_type}"
                )))
            }
        }
        Ok(())
    }

    pub fn with(mut self, symbol_type: SymbolType, value: impl Into<SymbolValue>) -> Result<Self> {
        self.set(symbol_type, value.into())?;
        Ok(self)
    }

    /// These options with every resolved symbol laid over them
    pub fn overlay(&self, symbols: &SymbolMap<SymbolValue>) -> Result<Self> {
        let mut options = *self;
        for (symbol_type, value) in symbols.iter() {
            options.set(symbol_type, *value)?;
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_defaults() {
        let options = SymbolOptions::random(&mut ChaCha8Rng::seed_from_u64(4));
        assert_eq!(options.fill_size, 0.4);
        assert_eq!(options.fill_width, 1.2);
        assert_eq!(options.fill_height, 0.8);
        assert_eq!(options.outline_color, Rgb::BLACK);
        assert_eq!(options.outline_width, 0.09);
    }

    #[test]
    fn test_overlay() {
        let base = SymbolOptions::new(Rgb::WHITE);
        let mut symbols = SymbolMap::new();
        symbols.insert(SymbolType::FillColor, SymbolValue::Color(Rgb::new(10, 20, 30)));
        symbols.insert(SymbolType::OutlineWidth, SymbolValue::Size(0.5));

        let options = base.overlay(&symbols).unwrap();
        assert_eq!(options.fill_color, Rgb::new(10, 20, 30));
        assert_eq!(options.outline_width, 0.5);
        assert_eq!(options.fill_size, base.fill_size);
        assert_eq!(options.get(SymbolType::OutlineWidth), SymbolValue::Size(0.5));
    }

    #[test]
    fn test_overlay_rejects_mismatched_symbol() {
        let base = SymbolOptions::new(Rgb::WHITE);
        let mut symbols = SymbolMap::new();
        symbols.insert(SymbolType::FillSize, SymbolValue::Color(Rgb::BLACK));
        assert!(matches!(base.overlay(&symbols), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_mismatched_symbol() {
        let options = SymbolOptions::new(Rgb::WHITE);
        assert!(options.with(SymbolType::FillSize, Rgb::BLACK).is_err());
        assert!(options.with(SymbolType::OutlineColor, 2.0).is_err());
        assert_eq!(
            options.with(SymbolType::FillHeight, 2.0).unwrap().fill_height,
            2.0
        );
    }
}
