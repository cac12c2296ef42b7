//! Layout engine for computing word placement
//!
//! This module takes the words of a cloud and produces a `CloudLayout`
//! with non-overlapping positions relative to the canvas center.

pub mod config;
pub mod engine;
pub mod error;
pub mod measure;
pub mod spiral;
pub mod types;

pub use config::{CloudConfig, OverflowPolicy, Rotation, Spiral};
pub use engine::{LayoutJob, SpiralLayout};
pub use error::LayoutError;
pub use types::{BoundingBox, CloudLayout, PlacedWord, Point, Size};
