//! Defines the error types for the validation module.
use crate::display::format::format_bound;
use crate::store::{Bounds, FieldKind};
use std::fmt;
use thiserror::Error;

/// A parameter whose stored value lies outside its bounds.
///
/// This is field state, not a failure: it is produced on demand for the
/// presentation layer and disappears once the value is back in range.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfRangeParameter {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub bounds: Bounds,
}

impl fmt::Display for OutOfRangeParameter {
    /// `Amount must be between ₹10,000 and ₹10,000,000`,
    /// `Rate must be between 1% and 20%`, `Tenure must be between 1 and 30 years`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {}",
            self.label,
            format_bound(self.kind, self.bounds.min),
            format_bound(self.kind, self.bounds.max)
        )?;
        if self.kind == FieldKind::Tenure {
            f.write_str(" years")?;
        }
        Ok(())
    }
}

impl std::error::Error for OutOfRangeParameter {}

/// The specific category of a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorType {
    /// Wrong number of parameters or outputs, or a parameter in the wrong slot.
    Shape,
    /// Empty or repeated names.
    Naming,
    /// NaN or infinite numbers anywhere in a parameter description.
    NonFinite,
    /// `min > max` or a non-positive step.
    Bounds,
    /// Fallback or initial value outside the bounds.
    DefaultOutOfRange,
    /// Bounds that admit inputs the formula is undefined for.
    FormulaDomain,
}

/// A structured error report for a product configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The parameter the error concerns, if any.
    pub parameter: Option<String>,
    pub error_type: ValidationErrorType,
    pub message: String,
}

impl ValidationError {
    pub fn new(error_type: ValidationErrorType, message: impl Into<String>) -> Self {
        Self { parameter: None, error_type, message: message.into() }
    }

    pub fn at_parameter(mut self, name: &str) -> Self {
        self.parameter = Some(name.to_string());
        self
    }
}
