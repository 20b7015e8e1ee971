//! Static deck content: items plus category copy for the results panel.
//!
//! # Format
//!
//! ```json
//! {
//!     "items": [{ "id": 1, "text": "Motie 1", "tags": ["cosmicChill"] }],
//!     "categories": { "cosmicChill": { "name": "Cosmic Chill", "description": "..." } }
//! }
//! ```
//!
//! `moods` is accepted in place of `categories`. Content is loaded once at startup and is
//! read-only afterwards.
//!
//! # Validation
//!
//! Loading fails on an empty item list, duplicate ids or empty item text (see
//! [`ContentError`]). Tags that name no known category are logged and kept; they count
//! toward the tally but render as "no dominant mood".

pub mod loader;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use loader::{default_content, load_content, parse_content};

use crate::models::{CategoryInfo, CategoryKey, Item};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    pub items: Vec<Item>,
    #[serde(default, alias = "moods")]
    pub categories: BTreeMap<CategoryKey, CategoryInfo>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content has no items")]
    Empty,
    #[error("Duplicate item id {0}")]
    DuplicateId(u32),
    #[error("Item {0} has empty text")]
    EmptyText(u32),
}

impl Content {
    /// Check deck invariants and normalize items (tag dedup)
    pub fn validate(&mut self) -> Result<(), ContentError> {
        if self.items.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut seen = Vec::with_capacity(self.items.len());
        for item in &mut self.items {
            if seen.contains(&item.id) {
                return Err(ContentError::DuplicateId(item.id));
            }
            seen.push(item.id);

            if item.text.trim().is_empty() {
                return Err(ContentError::EmptyText(item.id));
            }
            item.dedup_tags();
        }
        Ok(())
    }

    /// Tags used by items that have no category entry
    pub fn unknown_tags(&self) -> Vec<&CategoryKey> {
        let mut unknown: Vec<&CategoryKey> = Vec::new();
        for tag in self.items.iter().flat_map(|item| &item.tags) {
            if !self.categories.contains_key(tag) && !unknown.contains(&tag) {
                unknown.push(tag);
            }
        }
        unknown
    }

    pub fn tagged_items(&self) -> usize {
        self.items.iter().filter(|item| !item.tags.is_empty()).count()
    }
}
