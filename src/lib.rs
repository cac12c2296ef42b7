//! Entity Cloud - word clouds for categorized entities
//!
//! This library lays out a mapping of category names to entity strings as a
//! word cloud and renders it to SVG.
//!
//! # Example
//!
//! ```rust
//! use entity_cloud::{render, SvgConfig};
//!
//! let target = render(r#"{"PERSON": ["Alice", "Bob"], "ORG": []}"#).unwrap();
//! assert_eq!(target.drawn_words().len(), 2);
//!
//! let svg = target.svg(&SvgConfig::default()).unwrap();
//! assert!(svg.contains("Alice (PERSON)"));
//! ```

pub mod cloud;
pub mod entities;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod stylesheet;
pub mod target;
pub mod words;

pub use cloud::{RenderOutcome, WordCloudRenderer};
pub use entities::CategorizedEntities;
pub use error::InputError;
pub use layout::{CloudConfig, CloudLayout, LayoutError, LayoutJob, SpiralLayout};
pub use renderer::{render_svg, SvgConfig};
pub use stylesheet::{Stylesheet, StylesheetError};
pub use target::{CloudTarget, EMPTY_MESSAGE};
pub use words::Word;

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading the entity input
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error loading a stylesheet
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    /// A layout finished after a newer render call started on the same target
    #[error("stale layout: target is at render {expected}, layout belongs to render {found}")]
    StaleLayout { expected: u64, found: u64 },

    /// A layout was drawn into a target that has no canvas
    #[error("render {ticket} has no canvas to draw into")]
    NotStarted { ticket: u64 },
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Layout configuration
    pub cloud: CloudConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for category colors
    pub stylesheet: Stylesheet,
    /// Seed for font sizes and placement
    pub seed: u64,
    /// Message shown when there are no entities
    pub empty_message: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            seed: 0,
            empty_message: EMPTY_MESSAGE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_cloud(mut self, config: CloudConfig) -> Self {
        self.cloud = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for category colors
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Read the stylesheet for category colors from a TOML file
    pub fn load_stylesheet(self, path: &Path) -> Result<Self, RenderError> {
        Ok(self.with_stylesheet(Stylesheet::from_file(path)?))
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the empty-state message
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

/// Render a JSON entity mapping with default configuration
///
/// # Example
///
/// ```rust
/// use entity_cloud::render;
///
/// let target = render("{}").unwrap();
/// assert!(!target.is_visible());
/// assert_eq!(target.message(), Some("No entities found in the document."));
/// ```
pub fn render(source: &str) -> Result<CloudTarget, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a JSON entity mapping with custom configuration
///
/// # Example
///
/// ```rust
/// use entity_cloud::{render_with_config, CloudConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_cloud(CloudConfig::default().with_size(300.0, 200.0))
///     .with_seed(7);
///
/// let target = render_with_config(r#"{"ORG": ["Acme"]}"#, config).unwrap();
/// assert_eq!(target.scene().unwrap().width, 300.0);
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<CloudTarget, RenderError> {
    let entities = CategorizedEntities::from_json(source)?;
    let mut target = CloudTarget::new();
    WordCloudRenderer::new(config).render(&mut target, &entities)?;
    Ok(target)
}
