//! Presentation helpers: number formatting and serializable calculator views.
pub mod format;
pub mod snapshot;

pub use format::{format_fixed2, format_money, format_thousands};
pub use snapshot::{CalculatorSnapshot, CalculatorState, DerivedOutputs, ParameterView, ResultLine};
