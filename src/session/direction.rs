use serde::{Deserialize, Serialize};

/// Horizontal swipe direction: current drag intent or last committed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Direction matching the sign of a horizontal offset (zero maps to `None`)
    pub fn from_offset(dx: f32) -> Self {
        if dx < 0.0 {
            Direction::Left
        } else if dx > 0.0 {
            Direction::Right
        } else {
            Direction::None
        }
    }

    pub fn is_none(self) -> bool {
        self == Direction::None
    }

    /// -1.0, 1.0 or 0.0, used to place exit animations
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
            Direction::None => 0.0,
        }
    }

    /// Feedback label shown for the direction
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "❌ No",
            Direction::Right => "✅ Yes",
            Direction::None => "",
        }
    }
}
