//! Swipedeck - swipe through a deck of statements in the terminal
//!
//! Each card is answered by dragging it left ("no") or right ("yes"). Once the deck is
//! exhausted the session shows a result: a yes/no count, or the dominant category among
//! the tags of every card answered "yes". The library provides:
//!
//! - A UI-independent session state machine with drag classification and tallying
//! - Content loading and validation for JSON decks
//! - TOML configuration for thresholds, copy and share settings
//! - Result sharing via social intent links with a clipboard fallback
//! - A ratatui front end with mouse and keyboard gestures
//!
//! # Example
//!
//! ```
//! use swipedeck::{Direction, SessionController, SessionOptions, SessionPhase, default_content};
//!
//! let content = default_content()?;
//! let mut session = SessionController::from_content(content, SessionOptions::default());
//! session.start();
//! while session.phase() == SessionPhase::InProgress {
//!     session.set_direction(Direction::Right);
//!     session.commit_swipe();
//! }
//! println!("{}", session.results().map(|r| r.title()).unwrap_or_default());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod models;
pub mod session;
pub mod share;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use content::{Content, ContentError, default_content, load_content};
pub use models::{CategoryInfo, CategoryKey, Item};
pub use session::{
    Direction, DragClass, SessionController, SessionOptions, SessionPhase, SessionResult, Tally,
    TallyMode, Thresholds, classify,
};
