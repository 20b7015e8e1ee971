//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use swipedeck::{CategoryInfo, CategoryKey, Content, Item, SessionController, SessionOptions};
use tempfile::TempDir;

/// Builder for deck content, in memory or written to a temp directory
pub struct ContentBuilder {
    items: Vec<Item>,
    categories: BTreeMap<CategoryKey, CategoryInfo>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self { items: Vec::new(), categories: BTreeMap::new() }
    }

    /// Add `n` untagged items with ids continuing from the current count
    pub fn with_items(mut self, n: u32) -> Self {
        let start = self.items.len() as u32 + 1;
        for id in start..start + n {
            self.items.push(Item::new(id, format!("Motie {}", id)));
        }
        self
    }

    /// Add one item tagged with `tags`
    pub fn with_tagged_item(mut self, tags: &[&str]) -> Self {
        let id = self.items.len() as u32 + 1;
        self.items.push(Item::new(id, format!("Statement {}", id)).with_tags(tags.iter().copied()));
        self
    }

    pub fn with_category(mut self, key: &str, name: &str) -> Self {
        self.categories.insert(
            CategoryKey::new(key),
            CategoryInfo { name: name.to_string(), description: format!("About {}", name) },
        );
        self
    }

    pub fn build(self) -> Content {
        Content { items: self.items, categories: self.categories }
    }

    pub fn session(self, options: SessionOptions) -> SessionController {
        SessionController::from_content(self.build(), options)
    }

    pub fn to_json(&self) -> String {
        let content = Content { items: self.items.clone(), categories: self.categories.clone() };
        serde_json::to_string_pretty(&content).expect("Failed to serialize content")
    }

    /// Write `content.json` into a new temp directory
    pub fn write(self) -> TestDir {
        let dir = TestDir::new();
        dir.write_file("content.json", &self.to_json());
        dir
    }
}

/// Temp directory holding content and config files
pub struct TestDir {
    temp_dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn content_path(&self) -> PathBuf {
        self.path().join("content.json")
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
