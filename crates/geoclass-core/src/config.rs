//! Configuration types for classification and rendering collaborators

use crate::color::{ColorStyle, Rgb};
use crate::error::{Error, Result};
use crate::symbol::SymbolType;
use serde::{Deserialize, Serialize};

/// Settings for the natural-breaks solver
///
/// Inputs longer than `sample_threshold` are not solved directly. Instead
/// `trials` random samples of `sample_size` values are solved and their
/// breaks averaged. Without a seed the sampled path is not reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JenksConfig {
    pub sample_threshold: usize,
    pub sample_size: usize,
    pub trials: usize,
    pub seed: Option<u64>,
}

impl Default for JenksConfig {
    fn default() -> Self {
        Self {
            sample_threshold: 1000,
            sample_size: 1000,
            trials: 6,
            seed: None,
        }
    }
}

impl JenksConfig {
    /// Set the input length above which sampling is used
    pub fn with_sample_threshold(mut self, threshold: usize) -> Self {
        self.sample_threshold = threshold;
        self
    }

    /// Set the number of values drawn per sampling trial
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the number of sampling trials
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the sampling parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::invalid_argument("jenks trials must be at least 1"));
        }
        if self.sample_size < 2 {
            return Err(Error::invalid_argument(format!(
                "jenks sample size {} must be at least 2",
                self.sample_size
            )));
        }
        Ok(())
    }
}

/// Settings shared by every classification run of a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub jenks: JenksConfig,
    /// Seed for categorical colors; `None` draws from entropy
    pub seed: Option<u64>,
    pub categorical_style: ColorStyle,
}

impl ClassifierConfig {
    pub fn with_jenks(mut self, jenks: JenksConfig) -> Self {
        self.jenks = jenks;
        self
    }

    /// Seed both the categorical color source and the jenks sampler
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.jenks.seed = Some(seed);
        self
    }

    pub fn with_categorical_style(mut self, style: ColorStyle) -> Self {
        self.categorical_style = style;
        self
    }
}

/// Geographic window shown on the map, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapExtent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl MapExtent {
    pub const WORLD: MapExtent = MapExtent {
        xmin: -180.0,
        xmax: 180.0,
        ymin: -90.0,
        ymax: 90.0,
    };

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

impl Default for MapExtent {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Immutable rendering settings handed to renderer construction
///
/// Maps longitude/latitude to pixels with a plain affine transform: the
/// extent's north-west corner lands on pixel (0, 0) and y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    extent: MapExtent,
    background: Option<Rgb>,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::default().with_dimensions(width, height)
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_argument(format!(
                "map dimensions {width}x{height} must be positive"
            )));
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Zoom to a geographic window
    pub fn with_extent(mut self, extent: MapExtent) -> Result<Self> {
        if !(extent.width() > 0.0 && extent.height() > 0.0) {
            return Err(Error::invalid_argument(format!(
                "map extent {extent:?} has no area"
            )));
        }
        self.extent = extent;
        Ok(self)
    }

    pub fn with_background(mut self, background: Option<Rgb>) -> Self {
        self.background = background;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn extent(&self) -> MapExtent {
        self.extent
    }

    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    /// Project a longitude/latitude pair to pixel coordinates
    pub fn to_pixel(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = (lon - self.extent.xmin) * self.width as f64 / self.extent.width();
        let y = (self.extent.ymax - lat) * self.height as f64 / self.extent.height();
        (x, y)
    }

    /// Convert a relative symbol size (percent of the map) to pixels
    ///
    /// Heights are relative to the map height, everything else to its width.
    /// Color channels have no size and return `None`.
    pub fn size_to_pixels(&self, symbol_type: SymbolType, size: f64) -> Option<f64> {
        match symbol_type {
            SymbolType::FillColor | SymbolType::OutlineColor => None,
            SymbolType::FillHeight => Some(self.height as f64 * size / 100.0),
            _ => Some(self.width as f64 * size / 100.0),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            extent: MapExtent::WORLD,
            background: None,
        }
    }
}
