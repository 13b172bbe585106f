use thiserror::Error;

/// Raised by [`crate::sampling::sample`] when a category table cannot form a
/// probability distribution. The built-in tables never trigger it, so seeing
/// one means a table was misconfigured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidWeightsError {
    #[error("category table is empty")]
    EmptyTable,

    #[error("category {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("category weights sum to {total}, expected a positive total")]
    NonPositiveTotal { total: f64 },
}

/// Input validation failures surfaced at the command-line boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Invalid MBTI type: {0}")]
    UnknownPersonality(String),
}
