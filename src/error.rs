//! Errors surfaced by the public calculator API.
//!
//! Out-of-range input is not among them: it is field state, see
//! [`crate::validation::OutOfRangeParameter`].
use crate::compute::ComputationError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("Unknown calculator '{0}'")]
    UnknownProduct(String),
    #[error("Invalid product configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),
    #[error(transparent)]
    Computation(#[from] ComputationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}
