//! Clipboard access for the share fallback.
//!
//! The system clipboard sits behind [`ClipboardProvider`] so share flows can be exercised
//! with a mock. Text is validated before the clipboard is touched.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum clipboard payload (64KB); share summaries are a line or two
const MAX_CLIPBOARD_SIZE: usize = 64 * 1024;

/// Clipboard write capability
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard, opened lazily on first write
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to initialize clipboard")?,
        };
        self.clipboard
            .insert(clipboard)
            .set_text(text)
            .context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Validates clipboard text without accessing system clipboard
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

/// Validate `text` and write it through `provider`.
///
/// # Errors
/// Returns error if:
/// - Text is empty
/// - Text is larger than 64KB
/// - The provider fails (clipboard locked, access denied, headless session)
pub fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    tracing::debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}
