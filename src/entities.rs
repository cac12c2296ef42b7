//! Categorized entity input
//!
//! The renderer consumes a mapping from category name (e.g. `PERSON`, `ORG`)
//! to the entity strings found for that category. Category order matters for
//! color assignment, so the mapping keeps the order of the source document.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;

use crate::error::InputError;

/// One category with its entity strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

/// Ordered mapping from category name to entity strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedEntities {
    categories: Vec<Category>,
}

impl CategorizedEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of the form `{"CATEGORY": ["item", ...], ...}`
    pub fn from_json(source: &str) -> Result<Self, InputError> {
        serde_json::from_str(source).map_err(|e| InputError::from_json(e, source))
    }

    /// Parse a larger JSON document and read the entities at `pointer`
    ///
    /// `pointer` uses RFC 6901 syntax, e.g. `/entities` for a document
    /// payload that nests the mapping under an `entities` field.
    pub fn from_json_pointer(source: &str, pointer: &str) -> Result<Self, InputError> {
        let doc: serde_json::Value =
            serde_json::from_str(source).map_err(|e| InputError::from_json(e, source))?;
        let value = doc
            .pointer(pointer)
            .ok_or_else(|| InputError::PointerNotFound {
                pointer: pointer.to_string(),
            })?;
        Self::deserialize(value).map_err(|e| InputError::from_json(e, source))
    }

    /// Insert or replace a category
    ///
    /// A replaced category keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, items: Vec<String>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.items = items,
            None => self.categories.push(Category { name, items }),
        }
    }

    /// Builder-style insert
    pub fn with_category<I, S>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, items.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.items.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Iterate `(category, item)` pairs in document order
    pub fn iter_items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |i| (c.name.as_str(), i.as_str())))
    }

    /// Total number of items across all categories
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// True when there is nothing to draw (no categories, or only empty ones)
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

impl<N, I, S> FromIterator<(N, I)> for CategorizedEntities
where
    N: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (name, items)| acc.with_category(name, items))
    }
}

impl Serialize for CategorizedEntities {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategorizedEntities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntitiesVisitor;

        impl<'de> Visitor<'de> for EntitiesVisitor {
            type Value = CategorizedEntities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to lists of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entities = CategorizedEntities::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<String>>()? {
                    entities.insert(name, items);
                }
                Ok(entities)
            }
        }

        deserializer.deserialize_map(EntitiesVisitor)
    }
}
