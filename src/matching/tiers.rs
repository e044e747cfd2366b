use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::error::ValidationError;

/// Lowest score counted as a best match.
pub const BEST_MATCH_MIN: u8 = 85;
/// Lowest score counted as a partial match; below this is a low match.
pub const PARTIAL_MATCH_MIN: u8 = 70;

/// Categorical bucket derived from a 0-100 match score. The score itself is
/// computed outside this crate; tiers only bucket an already-computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchTier {
    Best,
    Partial,
    Low,
}

impl MatchTier {
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Best => "Best Match",
            MatchTier::Partial => "Partial Match",
            MatchTier::Low => "Low Match",
        }
    }

    /// Band predicate used by the match-tier filter.
    pub fn contains(self, score: u8) -> bool {
        match self {
            MatchTier::Best => score >= BEST_MATCH_MIN,
            MatchTier::Partial => (PARTIAL_MATCH_MIN..BEST_MATCH_MIN).contains(&score),
            MatchTier::Low => score < PARTIAL_MATCH_MIN,
        }
    }
}

/// Strict classifier for presentation: out-of-range scores are a contract
/// violation on the scoring side and are surfaced, never clamped.
pub fn classify_match_score(score: i32) -> Result<MatchTier, ValidationError> {
    if !(0..=100).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange(score));
    }

    let score = score as u8;
    Ok(if score >= BEST_MATCH_MIN {
        MatchTier::Best
    } else if score >= PARTIAL_MATCH_MIN {
        MatchTier::Partial
    } else {
        MatchTier::Low
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(classify_match_score(85), Ok(MatchTier::Best));
        assert_eq!(classify_match_score(84), Ok(MatchTier::Partial));
        assert_eq!(classify_match_score(70), Ok(MatchTier::Partial));
        assert_eq!(classify_match_score(69), Ok(MatchTier::Low));
        assert_eq!(classify_match_score(100), Ok(MatchTier::Best));
        assert_eq!(classify_match_score(0), Ok(MatchTier::Low));
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert_eq!(
            classify_match_score(-1),
            Err(ValidationError::ScoreOutOfRange(-1))
        );
        assert_eq!(
            classify_match_score(101),
            Err(ValidationError::ScoreOutOfRange(101))
        );
    }

    #[test]
    fn bands_partition_the_score_space() {
        for score in 0..=100u8 {
            let hits = [MatchTier::Best, MatchTier::Partial, MatchTier::Low]
                .iter()
                .filter(|tier| tier.contains(score))
                .count();
            assert_eq!(hits, 1, "score {score} must land in exactly one tier");
        }
    }

    #[test]
    fn labels_match_display_copy() {
        assert_eq!(MatchTier::Best.label(), "Best Match");
        assert_eq!(MatchTier::Partial.label(), "Partial Match");
        assert_eq!(MatchTier::Low.label(), "Low Match");
        assert_eq!(MatchTier::Best.as_ref(), "best");
    }
}
