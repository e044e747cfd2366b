use thiserror::Error;

/// Validation failures raised before any entity is evaluated. Zero matches is
/// never an error; callers distinguish an empty result from a rejected input
/// by the `Result` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },
    #[error("match score {0} is outside the valid 0-100 range")]
    ScoreOutOfRange(i32),
}
