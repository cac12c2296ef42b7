//! Drawn elements of a word cloud
//!
//! A `Scene` is what a render leaves behind in its target: the canvas size
//! and the groups of styled words appended by each draw.

use crate::layout::Point;

/// A styled text element ready for output
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnWord {
    pub text: String,
    pub category: String,
    /// Offset from the group origin
    pub position: Point,
    /// Rotation in degrees
    pub rotate: f64,
    /// Font size in pixels
    pub font_size: f64,
    pub fill: String,
    /// Hover text
    pub title: String,
}

/// Words drawn together, translated to a shared origin
#[derive(Debug, Clone, PartialEq)]
pub struct WordGroup {
    pub origin: Point,
    pub words: Vec<DrawnWord>,
}

/// The drawing surface of a visualization container
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub font_family: Option<String>,
    pub groups: Vec<WordGroup>,
}

impl Scene {
    /// An empty canvas of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            font_family: None,
            groups: Vec::new(),
        }
    }

    pub fn with_font_family(mut self, font_family: Option<String>) -> Self {
        self.font_family = font_family;
        self
    }

    /// Canvas center, where word groups are anchored
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// All drawn words across groups, in drawing order
    pub fn words(&self) -> impl Iterator<Item = &DrawnWord> {
        self.groups.iter().flat_map(|g| g.words.iter())
    }

    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|g| g.words.len()).sum()
    }
}
