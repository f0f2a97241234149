//! Ranking configuration error types.

use thiserror::Error;

/// Result type for ranking configuration validation.
pub type RankingResult<T> = Result<T, RankingError>;

/// Errors raised while validating a ranking configuration.
#[derive(Debug, Error)]
pub enum RankingError {
    /// A field value falls outside its documented bounds.
    #[error("ranking config field {field} out of range: {value} (allowed {bounds})")]
    OutOfRange {
        field: &'static str,
        value: String,
        bounds: &'static str,
    },
}

impl RankingError {
    pub fn out_of_range(
        field: &'static str,
        value: impl ToString,
        bounds: &'static str,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            bounds,
        }
    }
}
