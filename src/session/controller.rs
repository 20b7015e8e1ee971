//! Swipe session state machine.
//!
//! [`SessionController`] owns the deck, the tally, the live drag direction and the session
//! phase. It only sees numeric offsets and directions; rendering, animation and input
//! devices live in the `tui` module.
//!
//! # Phases
//!
//! ```text
//! NotStarted --start()--> InProgress --last commit--> Finished
//!      ^                                                 |
//!      +---------------- restart() ----------------------+
//! ```
//!
//! `restart()` reloads the deck immediately but defers the tally reset by
//! [`SessionOptions::reset_delay`] so the results panel can slide out with its final
//! numbers. The pending reset is a single deadline owned by the controller: restarting
//! again replaces it, and committing a swipe while it is pending applies it first.

use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::classify::{DragClass, Thresholds, classify};
use super::direction::Direction;
use super::results::SessionResult;
use super::tally::{Tally, TallyMode};
use crate::content::Content;
use crate::models::{CategoryInfo, CategoryKey, Item};

/// Default delay before the tally is cleared after a restart (milliseconds)
pub const DEFAULT_RESET_DELAY_MS: u64 = 300;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Phase entered by `restart()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartTarget {
    /// Back to the welcome screen
    #[default]
    Welcome,
    /// Straight into a fresh deck
    Deck,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub tally_mode: TallyMode,
    pub thresholds: Thresholds,
    pub restart_to: RestartTarget,
    pub reset_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            tally_mode: TallyMode::default(),
            thresholds: Thresholds::default(),
            restart_to: RestartTarget::default(),
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
        }
    }
}

/// A committed swipe, handed back so the renderer can animate the removed card
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub item: Item,
    pub direction: Direction,
    /// Remaining cards after the commit
    pub remaining: usize,
}

/// Outcome of releasing a drag gesture
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// The swipe was committed; the card exits toward `exit_x`
    Committed { record: CommitRecord, exit_x: f32 },
    /// Below the commit threshold; the card returns to center
    Reverted,
    /// No front card or no session in progress
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SessionController {
    original: Vec<Item>,
    categories: BTreeMap<CategoryKey, CategoryInfo>,
    options: SessionOptions,
    phase: SessionPhase,
    deck: VecDeque<Item>,
    tally: Tally,
    direction: Direction,
    feedback_visible: bool,
    committed: usize,
    pending_reset: Option<Instant>,
    /// Results of the finished session being restarted, shown until the reset runs
    outgoing: Option<SessionResult>,
}

impl SessionController {
    pub fn new(
        items: Vec<Item>,
        categories: BTreeMap<CategoryKey, CategoryInfo>,
        options: SessionOptions,
    ) -> Self {
        let deck = items.iter().cloned().collect();
        let tally = Tally::new(options.tally_mode);
        Self {
            original: items,
            categories,
            options,
            phase: SessionPhase::NotStarted,
            deck,
            tally,
            direction: Direction::None,
            feedback_visible: false,
            committed: 0,
            pending_reset: None,
            outgoing: None,
        }
    }

    pub fn from_content(content: Content, options: SessionOptions) -> Self {
        Self::new(content.items, content.categories, options)
    }

    pub fn start(&mut self) {
        if self.phase != SessionPhase::NotStarted {
            return;
        }
        self.phase =
            if self.deck.is_empty() { SessionPhase::Finished } else { SessionPhase::InProgress };
        tracing::debug!(cards = self.deck.len(), "session started");
    }

    /// Record the current drag intent. Never touches the deck or the tally.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        self.direction = direction;
        self.feedback_visible = !direction.is_none();
    }

    /// Commit the current direction against the front card.
    ///
    /// No-op unless a session is in progress, the deck has a front card and a direction is
    /// set. The direction is cleared afterwards, so a repeated call for the same release
    /// does nothing.
    pub fn commit_swipe(&mut self) -> Option<CommitRecord> {
        if self.phase != SessionPhase::InProgress || self.direction.is_none() {
            return None;
        }
        let item = self.deck.pop_front()?;

        if self.pending_reset.take().is_some() {
            self.outgoing = None;
            self.tally.reset();
        }

        let direction = self.direction;
        self.tally.record(direction, &item);
        self.feedback_visible = false;
        self.committed += 1;
        if self.deck.is_empty() {
            self.phase = SessionPhase::Finished;
        }
        self.direction = Direction::None;

        tracing::debug!(id = item.id, ?direction, remaining = self.deck.len(), "swipe committed");
        Some(CommitRecord { item, direction, remaining: self.deck.len() })
    }

    /// Reload the full deck and schedule the tally reset at `now + reset_delay`.
    /// Any previously scheduled reset is replaced.
    pub fn restart(&mut self, now: Instant) {
        // Only a finished session has a results view to slide out
        self.outgoing = match self.phase {
            SessionPhase::Finished => {
                Some(SessionResult::from_tally(&self.tally, &self.categories))
            }
            _ => self.outgoing.take(),
        };
        self.deck = self.original.iter().cloned().collect();
        self.committed = 0;
        self.direction = Direction::None;
        self.feedback_visible = false;
        self.phase = match self.options.restart_to {
            RestartTarget::Welcome => SessionPhase::NotStarted,
            RestartTarget::Deck if self.deck.is_empty() => SessionPhase::Finished,
            RestartTarget::Deck => SessionPhase::InProgress,
        };
        self.pending_reset = Some(now + self.options.reset_delay);
        tracing::debug!(phase = ?self.phase, "session restarted");
    }

    /// Apply a due tally reset. Returns true if state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_reset {
            Some(deadline) if now >= deadline => {
                self.pending_reset = None;
                self.outgoing = None;
                self.tally.reset();
                tracing::debug!("tally reset applied");
                true
            }
            _ => false,
        }
    }

    /// Classify a live drag offset on the front card and update the feedback direction
    pub fn drag(&mut self, dx: f32) -> DragClass {
        if self.phase != SessionPhase::InProgress || self.deck.is_empty() {
            return DragClass::Neutral;
        }
        let class = classify(dx, &self.options.thresholds);
        self.set_direction(class.direction());
        class
    }

    /// Finish a drag gesture at offset `dx`, committing or reverting it
    pub fn release(&mut self, dx: f32) -> ReleaseOutcome {
        if self.phase != SessionPhase::InProgress || self.deck.is_empty() {
            return ReleaseOutcome::Ignored;
        }
        match classify(dx, &self.options.thresholds) {
            DragClass::Committed(direction) => {
                self.set_direction(direction);
                match self.commit_swipe() {
                    Some(record) => {
                        let exit_x = direction.sign() * self.options.thresholds.exit_distance;
                        ReleaseOutcome::Committed { record, exit_x }
                    }
                    None => ReleaseOutcome::Ignored,
                }
            }
            DragClass::Intent(_) | DragClass::Neutral => {
                self.set_direction(Direction::None);
                ReleaseOutcome::Reverted
            }
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn front(&self) -> Option<&Item> {
        self.deck.front()
    }

    /// Next-in-line card, rendered as a non-interactive preview
    pub fn next(&self) -> Option<&Item> {
        self.deck.get(1)
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> impl Iterator<Item = &Item> {
        self.deck.iter()
    }

    pub fn original_len(&self) -> usize {
        self.original.len()
    }

    /// Number of swipes committed since the last restart
    pub fn committed(&self) -> usize {
        self.committed
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.options.thresholds
    }

    pub fn categories(&self) -> &BTreeMap<CategoryKey, CategoryInfo> {
        &self.categories
    }

    pub fn reset_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Final aggregate, available once the deck is exhausted
    pub fn results(&self) -> Option<SessionResult> {
        if self.phase != SessionPhase::Finished {
            return None;
        }
        Some(SessionResult::from_tally(&self.tally, &self.categories))
    }

    /// Results still on screen while the deferred reset is pending, with the elapsed
    /// fraction of the delay (0..=1)
    pub fn closing_results(&self, now: Instant) -> Option<(SessionResult, f32)> {
        let deadline = self.pending_reset?;
        let result = self.outgoing.clone()?;
        let delay = self.options.reset_delay.as_secs_f32();
        let remaining = deadline.saturating_duration_since(now).as_secs_f32();
        let progress = if delay > 0.0 { (1.0 - remaining / delay).clamp(0.0, 1.0) } else { 1.0 };
        Some((result, progress))
    }
}
