//! Error kinds produced by the scoring engine

use serde::Serialize;
use thiserror::Error;

use crate::models::MetalType;

/// Scoring failures. None of these are faults: callers turn
/// `InsufficientData` and `UnknownBenchmark` into a neutral result, and
/// `InvalidRange` marks input that should have been rejected upstream.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringError {
    #[error("Insufficient data: {what}")]
    InsufficientData { what: String },

    #[error("No benchmark registered for metal type {metal}")]
    UnknownBenchmark { metal: MetalType },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ScoringError {
    pub fn insufficient(what: impl Into<String>) -> Self {
        ScoringError::InsufficientData { what: what.into() }
    }

    /// True for the kinds that map to a neutral result rather than an error response
    pub fn is_neutral(&self) -> bool {
        matches!(
            self,
            ScoringError::InsufficientData { .. } | ScoringError::UnknownBenchmark { .. }
        )
    }
}
