//! Data models for swipe sessions.
//!
//! - [`Item`] - A card presented in the deck
//! - [`CategoryKey`] - Tag attached to items, aggregated on right swipes
//! - [`CategoryInfo`] - Results copy for a category
//!
//! Items are immutable once loaded; see the `content` module for loading and validation.

pub mod item;

pub use item::{CategoryInfo, CategoryKey, Item};
