//! Color model for symbol ranges
//!
//! Colors travel through the classifier as [`Rgb`] values and are written
//! out as `#rrggbb` hex strings. Gradients are interpolated in HSL space:
//! hue follows the shortest arc around the color wheel, saturation and
//! lightness are blended linearly. An achromatic endpoint (zero saturation)
//! borrows the hue of the other endpoint so that fading to gray or white
//! does not sweep through unrelated hues.

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Golden angle in degrees, used to spread successive palette hues
pub const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with the given brightness in [0, 1]
    pub fn gray(brightness: f64) -> Self {
        let v = unit_to_byte(brightness);
        Self::new(v, v, v)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(format!("'{hex}' is not a hex color"));
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    /// Blend towards `other` in HSL space; `t` is clamped to [0, 1]
    pub fn interpolate(&self, other: &Rgb, t: f64) -> Rgb {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        self.to_hsl().interpolate(&other.to_hsl(), t).to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgb::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// HSL color: h in degrees [0, 360), s and l in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            let v = unit_to_byte(self.l);
            return Rgb::new(v, v, v);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h.rem_euclid(360.0) / 360.0;

        Rgb::new(
            unit_to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            unit_to_byte(hue_to_channel(p, q, h)),
            unit_to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Per-channel blend with shortest-arc hue
    pub fn interpolate(&self, other: &Hsl, t: f64) -> Hsl {
        let (from_h, to_h) = match (self.s == 0.0, other.s == 0.0) {
            (true, false) => (other.h, other.h),
            (false, true) => (self.h, self.h),
            _ => (self.h, other.h),
        };
        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }

        Hsl::new(
            from_h + dh * t,
            self.s + (other.s - self.s) * t,
            self.l + (other.l - self.l) * t,
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1},{:.0}%,{:.0}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Named saturation/lightness presets for generated colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorStyle {
    /// Intensity 0.7, brightness 0.5
    #[default]
    Standard,
    Strong,
    Dark,
    Matte,
    Bright,
    Weak,
    Pastelle,
}

impl ColorStyle {
    /// Saturation of colors in this style
    pub fn intensity(self) -> f64 {
        match self {
            ColorStyle::Standard => 0.7,
            ColorStyle::Strong => 1.0,
            ColorStyle::Dark => 0.8,
            ColorStyle::Matte => 0.4,
            ColorStyle::Bright => 0.8,
            ColorStyle::Weak => 0.3,
            ColorStyle::Pastelle => 0.5,
        }
    }

    /// Lightness of colors in this style
    pub fn brightness(self) -> f64 {
        match self {
            ColorStyle::Standard | ColorStyle::Strong | ColorStyle::Weak => 0.5,
            ColorStyle::Dark | ColorStyle::Matte => 0.2,
            ColorStyle::Bright => 0.7,
            ColorStyle::Pastelle => 0.6,
        }
    }

    /// A color of the given hue in this style
    pub fn color(self, hue: f64) -> Rgb {
        Hsl::new(hue, self.intensity(), self.brightness()).to_rgb()
    }
}

impl FromStr for ColorStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(ColorStyle::Standard),
            "strong" => Ok(ColorStyle::Strong),
            "dark" => Ok(ColorStyle::Dark),
            "matte" => Ok(ColorStyle::Matte),
            "bright" => Ok(ColorStyle::Bright),
            "weak" => Ok(ColorStyle::Weak),
            "pastelle" | "pastel" => Ok(ColorStyle::Pastelle),
            other => Err(Error::invalid_argument(format!("unknown color style '{other}'"))),
        }
    }
}

/// A single random color in the given style
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, style: ColorStyle) -> Rgb {
    style.color(rng.gen_range(0.0..360.0))
}

/// Endless sequence of distinct-looking colors
///
/// Starts at a random hue and advances by the golden angle, so consecutive
/// colors are far apart on the color wheel and hues do not repeat.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    hue: f64,
    style: ColorStyle,
}

impl ColorPalette {
    pub fn new(start_hue: f64, style: ColorStyle) -> Self {
        Self {
            hue: start_hue.rem_euclid(360.0),
            style,
        }
    }

    /// Palette with a random starting hue drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, style: ColorStyle) -> Self {
        Self::new(rng.gen_range(0.0..360.0), style)
    }

    pub fn next_color(&mut self) -> Rgb {
        let color = self.style.color(self.hue);
        self.hue = (self.hue + GOLDEN_ANGLE).rem_euclid(360.0);
        color
    }
}

impl Iterator for ColorPalette {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        Some(self.next_color())
    }
}
