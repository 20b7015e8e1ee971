use std::fmt;

use serde::{Deserialize, Serialize};

/// Key naming a result category (e.g. `cosmicChill`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Display copy for a category on the results panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single card in the deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<CategoryKey>,
}

impl Item {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), tags: Vec::new() }
    }

    pub fn with_tags<I, K>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<CategoryKey>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.dedup_tags();
        self
    }

    /// Drop repeated tags, keeping first-occurrence order
    pub fn dedup_tags(&mut self) {
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|tag| {
            if seen.contains(tag) {
                false
            } else {
                seen.push(tag.clone());
                true
            }
        });
    }
}
