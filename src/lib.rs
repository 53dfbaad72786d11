//! Input-validation and recalculation engine for the EMI, Loan, SIP and
//! Lumpsum calculators.
//!
//! A [`Calculator`] owns three bounded parameters fed by two redundant input
//! channels (slider and text field). Every edit is reconciled into a single
//! stored value, validated against the product's bounds, and, when all three
//! fields are in range, the product formula is re-run.
//!
//! ```
//! use fincalc_core::{Calculator, ProductKind};
//!
//! let mut emi = Calculator::new(ProductKind::Emi);
//! emi.on_text_change("principal", "1,000,000").unwrap();
//! let outputs = emi.get_derived_outputs();
//! assert!(outputs.all_valid);
//! assert!(outputs.get("monthly_emi").unwrap() > 20_000.0);
//! ```

pub mod calculator;
pub mod compute;
pub mod config;
pub mod display;
pub mod error;
pub mod store;
pub mod sync;
pub mod validation;

#[cfg(feature = "python")]
pub mod bindings {
    pub mod python;
}

pub use calculator::Calculator;
pub use config::{ProductConfig, ProductKind};
pub use display::{format_thousands, CalculatorSnapshot, CalculatorState, DerivedOutputs, ParameterView};
pub use error::CalculatorError;
pub use sync::{Channel, SyncOutcome};
pub use validation::OutOfRangeParameter;
