use std::time::{Duration, Instant};

use crate::models::Item;
use crate::session::Direction;

/// Duration of the card exit animation
pub const EXIT_DURATION: Duration = Duration::from_millis(300);
/// How long the committed vote stays on screen (fade in + fade out)
pub const VOTE_DURATION: Duration = Duration::from_millis(600);

fn fraction(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A committed card flying off toward `exit_x`
#[derive(Debug, Clone)]
pub struct ExitAnimation {
    pub item: Item,
    pub direction: Direction,
    /// Offset the card starts from (where it was released)
    pub from_x: f32,
    pub exit_x: f32,
    started: Instant,
}

impl ExitAnimation {
    pub fn new(item: Item, direction: Direction, from_x: f32, exit_x: f32, now: Instant) -> Self {
        Self { item, direction, from_x, exit_x, started: now }
    }

    pub fn progress(&self, now: Instant) -> f32 {
        fraction(self.started, EXIT_DURATION, now)
    }

    /// Current horizontal offset, easing out from the release point to the exit distance
    pub fn offset(&self, now: Instant) -> f32 {
        let t = ease_out(self.progress(now));
        self.from_x + (self.exit_x - self.from_x) * t
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Acknowledgment of the last committed direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteFeedback {
    pub direction: Direction,
    pub expires_at: Instant,
}

impl VoteFeedback {
    pub fn new(direction: Direction, now: Instant) -> Self {
        Self { direction, expires_at: now + VOTE_DURATION }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_animation_moves_to_exit_distance() {
        let now = Instant::now();
        let anim = ExitAnimation::new(Item::new(1, "x"), Direction::Right, 200.0, 250.0, now);

        assert_eq!(anim.offset(now), 200.0);
        assert!(!anim.is_done(now));

        let mid = anim.offset(now + EXIT_DURATION / 2);
        assert!(mid > 200.0 && mid < 250.0);

        assert_eq!(anim.offset(now + EXIT_DURATION), 250.0);
        assert!(anim.is_done(now + EXIT_DURATION));
    }

    #[test]
    fn test_exit_animation_left() {
        let now = Instant::now();
        let anim = ExitAnimation::new(Item::new(1, "x"), Direction::Left, -200.0, -250.0, now);
        assert_eq!(anim.offset(now + Duration::from_secs(2)), -250.0);
    }

    #[test]
    fn test_vote_feedback_expiry() {
        let now = Instant::now();
        let vote = VoteFeedback::new(Direction::Left, now);
        assert!(!vote.is_expired(now));
        assert!(!vote.is_expired(now + Duration::from_millis(599)));
        assert!(vote.is_expired(now + VOTE_DURATION));
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
