//! Stylesheet system for category colors
//!
//! A stylesheet supplies the categorical palette words are colored from, and
//! can pin specific categories (e.g. `PERSON`) to fixed colors so they stay
//! stable across documents.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::palette::{OrdinalScale, CATEGORY10};

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Stylesheet palette must contain at least one color")]
    EmptyPalette,
}

/// Palette and per-category colors for a word cloud
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Colors handed out to categories in order of first appearance
    pub palette: Vec<String>,
    /// Categories with a fixed color
    pub categories: HashMap<String, String>,
    /// Font family applied to every word
    pub font_family: Option<String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    palette: Option<TomlPalette>,
    #[serde(default)]
    categories: HashMap<String, String>,
    text: Option<TomlText>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlPalette {
    colors: Vec<String>,
}

#[derive(Deserialize)]
struct TomlText {
    font_family: Option<String>,
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    ///
    /// A missing `[palette]` table falls back to the ten-color categorical palette.
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        let palette = match parsed.palette {
            Some(p) if p.colors.is_empty() => return Err(StylesheetError::EmptyPalette),
            Some(p) => p.colors,
            None => default_palette(),
        };

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            palette,
            categories: parsed.categories,
            font_family: parsed.text.and_then(|t| t.font_family),
        })
    }

    /// A fresh color scale over this stylesheet's palette and pinned categories
    pub fn color_scale(&self) -> OrdinalScale {
        OrdinalScale::new(self.palette.clone()).with_pinned(self.categories.clone())
    }
}

fn default_palette() -> Vec<String> {
    CATEGORY10.iter().map(|c| c.to_string()).collect()
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            palette: default_palette(),
            categories: HashMap::new(),
            font_family: None,
        }
    }
}
