//! Sharing a session result.
//!
//! A share goes through one of three capabilities, chosen by probing the platform:
//!
//! - [`ShareCapability::SocialIntentLink`] - open an X/LinkedIn/Facebook intent URL
//! - [`ShareCapability::NativeShare`] - hand the text to a native share sheet
//! - [`ShareCapability::ClipboardFallback`] - copy `"<text> - <url>"` to the clipboard
//!
//! A native request on a platform without a share sheet falls back to the clipboard, and
//! so does a social link that cannot be opened. A clipboard failure is the only error the
//! caller sees; the TUI shows it once as a notice.

pub mod platform;

use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub use platform::{SharePlatform, TerminalPlatform};

use crate::clipboard::{ClipboardProvider, copy_with_provider};

// Same set as JavaScript's encodeURIComponent
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    X,
    LinkedIn,
    Facebook,
    Native,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] =
        [ShareTarget::X, ShareTarget::LinkedIn, ShareTarget::Facebook, ShareTarget::Native];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::X => "X",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Native => "Share",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareCapability {
    NativeShare,
    SocialIntentLink,
    ClipboardFallback,
}

/// What to share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub page_url: String,
}

impl ShareRequest {
    /// Text copied when falling back to the clipboard
    pub fn clipboard_text(&self) -> String {
        if self.page_url.is_empty() {
            self.text.clone()
        } else {
            format!("{} - {}", self.text, self.page_url)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet
    Shared,
    /// Intent URL opened in a new context
    Opened(String),
    /// Copied to the clipboard instead
    Copied(String),
}

impl ShareOutcome {
    /// One-line notice for the status bar
    pub fn notice(&self) -> String {
        match self {
            ShareOutcome::Shared => "✓ Shared".to_string(),
            ShareOutcome::Opened(_) => "✓ Opened share link".to_string(),
            ShareOutcome::Copied(_) => "✓ Results copied to clipboard!".to_string(),
        }
    }
}

/// Intent URL for a social target; `None` for [`ShareTarget::Native`]
pub fn intent_url(target: ShareTarget, text: &str, page_url: &str) -> Option<String> {
    let text = utf8_percent_encode(text, COMPONENT_SET);
    let url = utf8_percent_encode(page_url, COMPONENT_SET);
    match target {
        ShareTarget::X => {
            Some(format!("https://twitter.com/intent/tweet?text={}&url={}", text, url))
        }
        ShareTarget::LinkedIn => {
            Some(format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url))
        }
        ShareTarget::Facebook => {
            Some(format!("https://www.facebook.com/sharer/sharer.php?u={}", url))
        }
        ShareTarget::Native => None,
    }
}

/// Pick the capability used for `target` on `platform`
pub fn select_capability(target: ShareTarget, platform: &dyn SharePlatform) -> ShareCapability {
    match target {
        ShareTarget::Native if platform.supports_native_share() => ShareCapability::NativeShare,
        ShareTarget::Native => ShareCapability::ClipboardFallback,
        ShareTarget::X | ShareTarget::LinkedIn | ShareTarget::Facebook => {
            ShareCapability::SocialIntentLink
        }
    }
}

/// Share `request` to `target`, degrading to the clipboard where the platform cannot help
pub fn share(
    target: ShareTarget,
    request: &ShareRequest,
    platform: &mut dyn SharePlatform,
    clipboard: &mut dyn ClipboardProvider,
) -> Result<ShareOutcome> {
    let outcome = match select_capability(target, platform) {
        ShareCapability::NativeShare => {
            match platform.native_share(&request.title, &request.text, &request.page_url) {
                Ok(()) => ShareOutcome::Shared,
                Err(e) => {
                    tracing::warn!("native share failed, copying instead: {:#}", e);
                    copy_fallback(&request.clipboard_text(), clipboard)?
                }
            }
        }
        ShareCapability::SocialIntentLink => {
            let url = intent_url(target, &request.text, &request.page_url)
                .context("Share target has no intent URL")?;
            match platform.open_url(&url) {
                Ok(()) => ShareOutcome::Opened(url),
                Err(e) => {
                    tracing::warn!(
                        share_target = target.label(),
                        "could not open share link: {:#}",
                        e
                    );
                    copy_fallback(&url, clipboard)?
                }
            }
        }
        ShareCapability::ClipboardFallback => copy_fallback(&request.clipboard_text(), clipboard)?,
    };
    tracing::info!(share_target = target.label(), ?outcome, "shared result");
    Ok(outcome)
}

fn copy_fallback(text: &str, clipboard: &mut dyn ClipboardProvider) -> Result<ShareOutcome> {
    copy_with_provider(text, clipboard)?;
    Ok(ShareOutcome::Copied(text.to_string()))
}
