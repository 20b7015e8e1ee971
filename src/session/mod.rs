//! Swipe session core: drag classification, deck and tally state machine, results.
//!
//! - [`classify`] maps a horizontal drag offset to committed, intent or neutral
//! - [`SessionController`] owns the deck, tally, direction and phase
//! - [`dominant_category`] picks the most frequent tag with first-seen tie-breaking
//! - [`DragGesture`] turns pointer positions and key nudges into offsets

pub mod classify;
pub mod controller;
pub mod direction;
pub mod gesture;
pub mod results;
pub mod tally;

pub use classify::{DragClass, Thresholds, classify, drag_progress};
pub use controller::{
    CommitRecord, ReleaseOutcome, RestartTarget, SessionController, SessionOptions, SessionPhase,
};
pub use direction::Direction;
pub use gesture::DragGesture;
pub use results::SessionResult;
pub use tally::{Tally, TallyMode, dominant_category};
