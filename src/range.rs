use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Closed numeric range used for both entity attributes (a job's "4-6 years"
/// of required experience, a salary band) and filter constraints. Single
/// scalar values are expressed as a degenerate range via [`ValueRange::exact`]
/// so jobs and candidates share one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn exact(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min > self.max {
            return Err(ValidationError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Representative value when an entity-side range is compared against a
    /// constraint range: the lower bound ("4-6 years" counts as 4).
    pub fn lower_bound(&self) -> u32 {
        self.min
    }
}

#[derive(Deserialize)]
struct RawRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawRange> for ValueRange {
    type Error = ValidationError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        ValueRange::new(raw.min, raw.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        assert_eq!(
            ValueRange::new(10, 5),
            Err(ValidationError::InvalidRange { min: 10, max: 5 })
        );
        assert!(ValueRange::new(5, 10).is_ok());
        assert!(ValueRange::new(5, 5).is_ok());
    }

    #[test]
    fn contains_is_inclusive() {
        let range = ValueRange::new(5, 10).unwrap();
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(10));
        assert!(!range.contains(11));
    }

    #[test]
    fn exact_is_a_degenerate_range() {
        let range = ValueRange::exact(7);
        assert_eq!(range.lower_bound(), 7);
        assert!(range.contains(7));
        assert!(!range.contains(6));
    }

    #[test]
    fn deserialization_enforces_bounds() {
        let ok: ValueRange = serde_json::from_str(r#"{"min":3,"max":6}"#).unwrap();
        assert_eq!(ok, ValueRange::new(3, 6).unwrap());

        let err = serde_json::from_str::<ValueRange>(r#"{"min":6,"max":3}"#);
        assert!(err.is_err());
    }
}
