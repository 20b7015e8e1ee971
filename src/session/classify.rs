//! Drag classification.
//!
//! A pure function of the horizontal offset `dx` and explicit [`Thresholds`]:
//!
//! ```text
//! |dx| >= commit            -> Committed(side)
//! feedback <= |dx| < commit -> Intent(side)
//! otherwise                 -> Neutral
//! ```
//!
//! Both boundaries are closed: `dx = ±commit` commits and `dx = ±feedback` shows intent.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Drag-offset thresholds, in offset units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Offset magnitude at which intent feedback starts
    pub feedback: f32,
    /// Offset magnitude at which a release commits the swipe
    pub commit: f32,
    /// How far a committed card travels during its exit animation
    pub exit_distance: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { feedback: 10.0, commit: 200.0, exit_distance: 250.0 }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        if !(self.feedback.is_finite() && self.commit.is_finite() && self.exit_distance.is_finite())
        {
            bail!("Thresholds must be finite numbers");
        }
        if self.feedback < 0.0 {
            bail!("Feedback threshold must not be negative (got {})", self.feedback);
        }
        if self.feedback >= self.commit {
            bail!(
                "Feedback threshold ({}) must be smaller than commit threshold ({})",
                self.feedback,
                self.commit
            );
        }
        if self.exit_distance < self.commit {
            bail!(
                "Exit distance ({}) must be at least the commit threshold ({})",
                self.exit_distance,
                self.commit
            );
        }
        Ok(())
    }
}

/// Result of classifying a drag offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragClass {
    /// Releasing here commits the swipe
    Committed(Direction),
    /// Feedback only; releasing here snaps the card back
    Intent(Direction),
    Neutral,
}

impl DragClass {
    /// Direction to show as feedback while dragging
    pub fn direction(self) -> Direction {
        match self {
            DragClass::Committed(direction) | DragClass::Intent(direction) => direction,
            DragClass::Neutral => Direction::None,
        }
    }

    pub fn is_committed(self) -> bool {
        matches!(self, DragClass::Committed(_))
    }
}

pub fn classify(dx: f32, thresholds: &Thresholds) -> DragClass {
    let magnitude = dx.abs();
    if magnitude >= thresholds.commit {
        DragClass::Committed(Direction::from_offset(dx))
    } else if magnitude >= thresholds.feedback && magnitude > 0.0 {
        DragClass::Intent(Direction::from_offset(dx))
    } else {
        DragClass::Neutral
    }
}

/// Drag progress toward the commit threshold, clamped to 0..=1
pub fn drag_progress(dx: f32, thresholds: &Thresholds) -> f32 {
    if thresholds.commit <= 0.0 {
        return if dx == 0.0 { 0.0 } else { 1.0 };
    }
    (dx.abs() / thresholds.commit).min(1.0)
}
