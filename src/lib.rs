pub mod criteria;
pub mod error;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

pub use criteria::FilterCriteria;
pub use error::ValidationError;
pub use matching::filter::{filter_entities, FilterConfig, FilterEngine, FilterTarget, SearchFields};
pub use matching::location::LocationSelector;
pub use matching::tiers::{classify_match_score, MatchTier, BEST_MATCH_MIN, PARTIAL_MATCH_MIN};
pub use range::ValueRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

// Entities subject to filtering. Creation, update, and persistence belong to
// the external entity store; this crate treats them as read-only inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub company_logo: Option<String>,
    /// Free text, may embed a work mode tag such as "(Remote)" or "(Hybrid)".
    pub location: String,
    pub employment_type: EmploymentType,
    pub posted_at: DateTime<Utc>,
    /// Annual salary band in USD.
    pub salary: Option<ValueRange>,
    /// Required experience in years.
    pub experience: Option<ValueRange>,
    pub skills: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub location: String,
    pub experience_years: u32,
    pub skills: Vec<String>,
    pub education: String,
    pub resume_keywords: Option<Vec<String>>,
    /// 0-100, computed externally against a specific job context.
    pub match_score: Option<u8>,
}
