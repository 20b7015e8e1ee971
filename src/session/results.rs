use std::collections::BTreeMap;

use super::tally::{Tally, dominant_category};
use crate::models::{CategoryInfo, CategoryKey};

/// Title shown when no category dominates
pub const NO_DOMINANT_TITLE: &str = "No dominant mood detected";

/// Aggregated outcome of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResult {
    Binary { yes: usize, no: usize },
    Categorical { dominant: Option<CategoryKey>, info: Option<CategoryInfo> },
}

impl SessionResult {
    pub fn from_tally(tally: &Tally, categories: &BTreeMap<CategoryKey, CategoryInfo>) -> Self {
        match tally {
            Tally::Binary { yes, no } => SessionResult::Binary { yes: *yes, no: *no },
            Tally::Categorical { tags } => {
                let dominant = dominant_category(tags).cloned();
                let info = dominant.as_ref().and_then(|key| categories.get(key)).cloned();
                SessionResult::Categorical { dominant, info }
            }
        }
    }

    /// Headline for the results panel
    pub fn title(&self) -> String {
        match self {
            SessionResult::Binary { yes, no } => format!("{} yes / {} no", yes, no),
            SessionResult::Categorical { info: Some(info), .. } => info.name.clone(),
            SessionResult::Categorical { info: None, .. } => NO_DOMINANT_TITLE.to_string(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SessionResult::Categorical { info: Some(info), .. } if !info.description.is_empty() => {
                Some(&info.description)
            }
            _ => None,
        }
    }

    /// Text handed to share targets, prefixed with the configured results copy
    pub fn summary(&self, results_text: &str) -> String {
        format!("{}: {}", results_text, self.title())
    }
}
