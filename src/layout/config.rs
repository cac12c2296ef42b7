//! Configuration for the layout engine

use std::ops::Range;

use crate::words::DEFAULT_FONT_SIZE_RANGE;

use super::error::LayoutError;
use super::types::Size;

/// How each word's rotation is chosen
#[derive(Debug, Clone, PartialEq)]
pub enum Rotation {
    /// Every word gets the same angle (degrees)
    Fixed(f64),
    /// Pick one of `orientations` evenly spaced angles between `min` and `max`
    Random {
        min: f64,
        max: f64,
        orientations: u32,
    },
}

/// Spiral walked from a word's start position while searching for free space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spiral {
    Archimedean,
    Rectangular,
}

/// What to do with a word that does not fit inside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep walking past the canvas edge so every word is placed
    Extend,
    /// Leave the word out
    Drop,
}

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Canvas width in pixels
    pub width: f64,

    /// Canvas height in pixels
    pub height: f64,

    /// Minimum gap between any two words
    pub padding: f64,

    /// Half-open range font sizes are drawn from
    pub font_size_range: Range<f64>,

    pub rotation: Rotation,

    pub spiral: Spiral,

    pub overflow: OverflowPolicy,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 5.0,
            font_size_range: DEFAULT_FONT_SIZE_RANGE,
            rotation: Rotation::Fixed(0.0),
            spiral: Spiral::Archimedean,
            overflow: OverflowPolicy::Extend,
        }
    }
}

impl CloudConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the gap between words
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the font size range
    pub fn with_font_size_range(mut self, range: Range<f64>) -> Self {
        self.font_size_range = range;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_spiral(mut self, spiral: Spiral) -> Self {
        self.spiral = spiral;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn canvas(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Reject configurations the layout cannot run with
    pub fn validate(&self) -> Result<(), LayoutError> {
        let finite = self.width.is_finite() && self.height.is_finite();
        if !(finite && self.width > 0.0 && self.height > 0.0) {
            return Err(LayoutError::invalid_config(format!(
                "canvas must have a positive finite size, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(LayoutError::invalid_config(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }
        let sizes = &self.font_size_range;
        if !(sizes.end.is_finite() && sizes.start > 0.0 && sizes.start < sizes.end) {
            return Err(LayoutError::invalid_config(format!(
                "font size range must be non-empty and positive, got {}..{}",
                sizes.start, sizes.end
            )));
        }
        if let Rotation::Random {
            min,
            max,
            orientations,
        } = self.rotation
        {
            if orientations == 0 || min > max {
                return Err(LayoutError::invalid_config(format!(
                    "random rotation needs min <= max and at least one orientation, got {}..{} with {}",
                    min, max, orientations
                )));
            }
        }
        Ok(())
    }
}
