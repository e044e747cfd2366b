use tracing::debug;

use super::skills::check_required_skills;
use crate::{
    criteria::FilterCriteria, error::ValidationError, normalize::contains_ci, range::ValueRange,
    CandidateProfile, EmploymentType, JobPosting,
};

/// Field set consulted by the free-text search predicate. Defaults mirror the
/// search boxes in the application shell: title, company/candidate name, and
/// each skill tag individually.
#[derive(Debug, Clone)]
pub struct SearchFields {
    pub title: bool,
    pub owner: bool,
    pub skills: bool,
    pub description: bool,
    pub location: bool,
}

impl Default for SearchFields {
    fn default() -> Self {
        Self {
            title: true,
            owner: true,
            skills: true,
            description: false,
            location: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub search_fields: SearchFields,
}

/// Seam between entity shape and predicate logic. Both entity kinds are
/// filterable with the same criteria; attributes an entity does not carry
/// default to `None` and fail closed when the matching criterion is active.
pub trait FilterTarget {
    fn title(&self) -> &str;
    /// Company for a job posting, candidate name for a profile.
    fn owner_name(&self) -> &str;
    fn location(&self) -> &str;
    fn skills(&self) -> &[String];
    fn description(&self) -> Option<&str> {
        None
    }
    fn employment_type(&self) -> Option<EmploymentType> {
        None
    }
    /// Years of experience as a canonical range (min == max for a scalar).
    fn experience(&self) -> Option<ValueRange> {
        None
    }
    /// Annual salary band in USD.
    fn salary(&self) -> Option<ValueRange> {
        None
    }
    fn resume_keywords(&self) -> Option<&[String]> {
        None
    }
    /// Externally computed 0-100 match score, when one exists.
    fn match_score(&self) -> Option<u8> {
        None
    }
}

impl FilterTarget for JobPosting {
    fn title(&self) -> &str {
        &self.title
    }

    fn owner_name(&self) -> &str {
        &self.company
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn skills(&self) -> &[String] {
        &self.skills
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn employment_type(&self) -> Option<EmploymentType> {
        Some(self.employment_type)
    }

    fn experience(&self) -> Option<ValueRange> {
        self.experience
    }

    fn salary(&self) -> Option<ValueRange> {
        self.salary
    }
}

impl FilterTarget for CandidateProfile {
    fn title(&self) -> &str {
        &self.title
    }

    fn owner_name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn skills(&self) -> &[String] {
        &self.skills
    }

    fn experience(&self) -> Option<ValueRange> {
        Some(ValueRange::exact(self.experience_years))
    }

    fn resume_keywords(&self) -> Option<&[String]> {
        self.resume_keywords.as_deref()
    }

    fn match_score(&self) -> Option<u8> {
        self.match_score
    }
}

/// Flat conjunctive filter: every active criterion must hold, inactive
/// criteria impose nothing. Stable and side-effect-free; the result is the
/// order-preserving subsequence of the input that satisfies the criteria.
pub struct FilterEngine {
    config: FilterConfig,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl FilterEngine {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Validates the criteria before evaluating any entity; an invalid range
    /// is surfaced instead of silently producing a wrong result set.
    pub fn filter_entities<T>(
        &self,
        entities: &[T],
        criteria: &FilterCriteria,
    ) -> Result<Vec<T>, ValidationError>
    where
        T: FilterTarget + Clone,
    {
        criteria.validate()?;

        let kept: Vec<T> = entities
            .iter()
            .filter(|entity| self.matches(*entity, criteria))
            .cloned()
            .collect();

        debug!(
            total = entities.len(),
            kept = kept.len(),
            "filtered entity collection"
        );
        Ok(kept)
    }

    /// Per-entity predicate. Callers are expected to have validated the
    /// criteria; [`FilterEngine::filter_entities`] does so on their behalf.
    pub fn matches<T: FilterTarget>(&self, entity: &T, criteria: &FilterCriteria) -> bool {
        self.matches_search_term(entity, criteria.search_term.as_deref())
            && matches_employment_type(entity, criteria.employment_type)
            && matches_range(entity.experience(), criteria.experience)
            && matches_range(entity.salary(), criteria.salary)
            && check_required_skills(&criteria.required_skills, entity.skills()).satisfied
            && criteria
                .location
                .as_ref()
                .map_or(true, |selector| selector.matches(entity.location()))
            && matches_resume_keyword(entity, criteria.resume_keyword.as_deref())
            && criteria.match_tier.map_or(true, |tier| {
                entity.match_score().is_some_and(|score| tier.contains(score))
            })
    }

    fn matches_search_term<T: FilterTarget>(&self, entity: &T, term: Option<&str>) -> bool {
        let Some(term) = term else {
            return true;
        };
        if term.trim().is_empty() {
            return true;
        }

        let fields = &self.config.search_fields;
        (fields.title && contains_ci(entity.title(), term))
            || (fields.owner && contains_ci(entity.owner_name(), term))
            || (fields.skills && entity.skills().iter().any(|skill| contains_ci(skill, term)))
            || (fields.description
                && entity
                    .description()
                    .is_some_and(|text| contains_ci(text, term)))
            || (fields.location && contains_ci(entity.location(), term))
    }
}

fn matches_employment_type<T: FilterTarget>(entity: &T, wanted: Option<EmploymentType>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => entity.employment_type() == Some(wanted),
    }
}

/// Range constraint against an entity-side value. The entity's representative
/// value is the lower bound of its own range; an entity without the attribute
/// fails closed while the constraint is active.
fn matches_range(value: Option<ValueRange>, constraint: Option<ValueRange>) -> bool {
    match constraint {
        None => true,
        Some(constraint) => value.is_some_and(|value| constraint.contains(value.lower_bound())),
    }
}

fn matches_resume_keyword<T: FilterTarget>(entity: &T, keyword: Option<&str>) -> bool {
    let Some(keyword) = keyword else {
        return true;
    };
    if keyword.trim().is_empty() {
        return true;
    }

    // Absent keyword list fails closed while the filter is active.
    entity
        .resume_keywords()
        .is_some_and(|tags| tags.iter().any(|tag| contains_ci(tag, keyword)))
}

/// Filter with the default searchable-field set.
pub fn filter_entities<T>(
    entities: &[T],
    criteria: &FilterCriteria,
) -> Result<Vec<T>, ValidationError>
where
    T: FilterTarget + Clone,
{
    FilterEngine::default().filter_entities(entities, criteria)
}
