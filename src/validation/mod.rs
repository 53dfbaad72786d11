//! The Validator: field range checks that gate recomputation, and the
//! consistency checks a product configuration must pass before use.

pub use self::error::{OutOfRangeParameter, ValidationError, ValidationErrorType};
pub use self::validator::{all_valid, field_errors, is_field_valid, Validator};

// --- MODULE DECLARATIONS ---
mod error;
mod validator;
mod rules {
    pub mod domain;
    pub mod range;
}
