//! SVG renderer for generating output from drawn scenes
//!
//! This module holds the categorical color scale, the scene model that draws
//! write into, and the SVG serializer.

pub mod config;
pub mod palette;
pub mod scene;
pub mod svg;

pub use config::SvgConfig;
pub use palette::{OrdinalScale, CATEGORY10};
pub use scene::{DrawnWord, Scene, WordGroup};
pub use svg::render_svg;
