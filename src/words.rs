//! Word records derived from categorized entities

use std::ops::Range;

use rand::Rng;

use crate::entities::CategorizedEntities;

/// Default font size range in pixels (half-open)
pub const DEFAULT_FONT_SIZE_RANGE: Range<f64> = 20.0..50.0;

/// A single entity prepared for layout
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    /// Font size in pixels
    pub size: f64,
    pub category: String,
}

impl Word {
    pub fn new(text: impl Into<String>, size: f64, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size,
            category: category.into(),
        }
    }

    /// Tooltip text shown for the drawn word
    pub fn tooltip(&self) -> String {
        format!("{} ({})", self.text, self.category)
    }
}

/// Flatten entities into one word per item, in document order
///
/// Each word draws its font size from `rng` within `sizes`. The range must be
/// non-empty; `CloudConfig::validate` checks this before rendering.
pub fn flatten<R: Rng + ?Sized>(
    entities: &CategorizedEntities,
    sizes: Range<f64>,
    rng: &mut R,
) -> Vec<Word> {
    entities
        .iter_items()
        .map(|(category, item)| Word::new(item, rng.gen_range(sizes.clone()), category))
        .collect()
}
