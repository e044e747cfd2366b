use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationError,
    matching::{location::LocationSelector, tiers::MatchTier},
    range::ValueRange,
    EmploymentType,
};

/// Structured query combining zero or more narrowing constraints. Absent or
/// empty fields impose no constraint, so the default value matches every
/// entity. Built per user interaction and discarded with the result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_term: Option<String>,
    pub employment_type: Option<EmploymentType>,
    /// Years of experience.
    pub experience: Option<ValueRange>,
    /// Annual salary in USD.
    pub salary: Option<ValueRange>,
    /// Conjunction: an entity must possess every listed tag.
    pub required_skills: Vec<String>,
    pub location: Option<LocationSelector>,
    pub resume_keyword: Option<String>,
    /// `None` means "all tiers".
    pub match_tier: Option<MatchTier>,
}

impl FilterCriteria {
    /// Re-checks range invariants. Deserialization already enforces them, but
    /// fields are public and hand-built values go through here before the
    /// engine evaluates anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for range in [self.experience, self.salary].into_iter().flatten() {
            range.validate()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_none()
            && self.employment_type.is_none()
            && self.experience.is_none()
            && self.salary.is_none()
            && self.required_skills.is_empty()
            && self.location.is_none()
            && self.resume_keyword.is_none()
            && self.match_tier.is_none()
    }
}
