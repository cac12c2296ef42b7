//! Categorical color scale

use std::collections::HashMap;

/// The ten-color categorical palette (d3 `schemeCategory10`)
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Maps category keys to palette colors in order of first use
///
/// The first unseen key gets `range[0]`, the next `range[1]`, and so on,
/// wrapping around when the palette runs out. Pinned keys always resolve to
/// their pinned color and do not consume a palette slot.
#[derive(Debug, Clone)]
pub struct OrdinalScale {
    range: Vec<String>,
    domain: Vec<String>,
    pinned: HashMap<String, String>,
}

impl OrdinalScale {
    pub fn new(range: Vec<String>) -> Self {
        Self {
            range,
            domain: Vec::new(),
            pinned: HashMap::new(),
        }
    }

    pub fn with_pinned(mut self, pinned: HashMap<String, String>) -> Self {
        self.pinned = pinned;
        self
    }

    /// Color for `key`, extending the domain if the key is new
    pub fn color(&mut self, key: &str) -> String {
        if let Some(color) = self.pinned.get(key) {
            return color.clone();
        }
        if self.range.is_empty() {
            return "#000000".to_string();
        }

        let index = match self.domain.iter().position(|k| k == key) {
            Some(index) => index,
            None => {
                self.domain.push(key.to_string());
                self.domain.len() - 1
            }
        };
        self.range[index % self.range.len()].clone()
    }

    /// Keys seen so far, in order of first use
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

impl Default for OrdinalScale {
    fn default() -> Self {
        Self::new(CATEGORY10.iter().map(|c| c.to_string()).collect())
    }
}
