use serde::{Deserialize, Serialize};

use crate::normalize::contains_ci;

/// Typed location filter. Location fields are free text that may embed a work
/// mode, e.g. "San Francisco, CA (Remote)" or "Austin, TX (Hybrid)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSelector {
    /// Matches any location advertising remote work.
    Remote,
    /// Case-insensitive substring match, so "Austin, TX (Hybrid)" satisfies
    /// an "Austin, TX" selection.
    Place(String),
}

impl LocationSelector {
    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationSelector::Remote => contains_ci(location, "remote"),
            LocationSelector::Place(place) => contains_ci(location, place),
        }
    }
}
