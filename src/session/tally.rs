use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::models::{CategoryKey, Item};

/// How committed swipes are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TallyMode {
    /// Count right swipes as yes and left swipes as no
    Binary,
    /// Collect the tags of right-swiped items
    #[default]
    Categorical,
}

/// Accumulated outcome of all commits so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tally {
    Binary { yes: usize, no: usize },
    /// Tags in collection order; a multiset
    Categorical { tags: Vec<CategoryKey> },
}

impl Tally {
    pub fn new(mode: TallyMode) -> Self {
        match mode {
            TallyMode::Binary => Tally::Binary { yes: 0, no: 0 },
            TallyMode::Categorical => Tally::Categorical { tags: Vec::new() },
        }
    }

    pub fn mode(&self) -> TallyMode {
        match self {
            Tally::Binary { .. } => TallyMode::Binary,
            Tally::Categorical { .. } => TallyMode::Categorical,
        }
    }

    /// Record a committed swipe of `item`. Left swipes leave a categorical tally untouched.
    pub fn record(&mut self, direction: Direction, item: &Item) {
        match (self, direction) {
            (Tally::Binary { yes, .. }, Direction::Right) => *yes += 1,
            (Tally::Binary { no, .. }, Direction::Left) => *no += 1,
            (Tally::Categorical { tags }, Direction::Right) => {
                tags.extend(item.tags.iter().cloned())
            }
            (Tally::Categorical { .. }, Direction::Left) | (_, Direction::None) => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Tally::new(self.mode());
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Tally::Binary { yes, no } => yes + no == 0,
            Tally::Categorical { tags } => tags.is_empty(),
        }
    }
}

/// Returns the most frequent tag. Ties go to the tag seen first in collection order;
/// an empty multiset has no dominant category.
pub fn dominant_category(tags: &[CategoryKey]) -> Option<&CategoryKey> {
    // (tag, count) in first-seen order
    let mut totals: Vec<(&CategoryKey, usize)> = Vec::new();
    for tag in tags {
        match totals.iter_mut().find(|(seen, _)| *seen == tag) {
            Some((_, count)) => *count += 1,
            None => totals.push((tag, 1)),
        }
    }

    let mut top: Option<(&CategoryKey, usize)> = None;
    for (tag, count) in totals {
        match top {
            Some((_, best)) if count <= best => {}
            _ => top = Some((tag, count)),
        }
    }
    top.map(|(tag, _)| tag)
}
