use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::Content;
use crate::utils::terminal::strip_ansi_codes;
use crate::utils::validate_file_size;

const DEFAULT_CONTENT: &str = include_str!("default_content.json");

/// Load and validate a content file
pub fn load_content(path: &Path) -> Result<Content> {
    // Open file and validate size on the same handle to avoid TOCTOU race
    let file = File::open(path)
        .with_context(|| format!("Failed to open content file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut raw = String::new();
    (&file)
        .read_to_string(&mut raw)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    let content = parse_content(&raw)
        .with_context(|| format!("Invalid content file: {}", path.display()))?;
    tracing::info!(path = %path.display(), items = content.items.len(), "loaded content");
    Ok(content)
}

/// Parse content JSON, sanitize item text for terminal display and validate the deck
pub fn parse_content(raw: &str) -> Result<Content> {
    let mut content: Content = serde_json::from_str(raw).context("Failed to parse content JSON")?;

    for item in &mut content.items {
        item.text = strip_ansi_codes(&item.text);
    }
    for info in content.categories.values_mut() {
        info.name = strip_ansi_codes(&info.name);
        info.description = strip_ansi_codes(&info.description);
    }

    content.validate()?;

    for tag in content.unknown_tags() {
        tracing::warn!(%tag, "tag has no category entry");
    }

    Ok(content)
}

/// Built-in mood quiz deck
pub fn default_content() -> Result<Content> {
    parse_content(DEFAULT_CONTENT).context("Built-in content is invalid")
}
