//! Rules tying a configuration to the formula it feeds.

use crate::compute::Formula;
use crate::config::ProductConfig;
use crate::store::FieldKind;
use crate::validation::error::{ValidationError, ValidationErrorType};
use std::collections::HashSet;

/// Slot order every formula reads its inputs in.
const SLOTS: [FieldKind; Formula::ARITY] = [FieldKind::Amount, FieldKind::Rate, FieldKind::Tenure];

/// Parameter count, slot kinds, output count and name uniqueness.
pub(crate) fn validate_shape(config: &ProductConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.parameters.len() != Formula::ARITY {
        errors.push(ValidationError::new(
            ValidationErrorType::Shape,
            format!("Expected {} parameters, found {}.", Formula::ARITY, config.parameters.len()),
        ));
    }
    for (spec, expected) in config.parameters.iter().zip(SLOTS) {
        if spec.kind != expected {
            errors.push(
                ValidationError::new(
                    ValidationErrorType::Shape,
                    format!("Parameter '{}' is {:?} but its slot takes {:?}.", spec.name, spec.kind, expected),
                )
                .at_parameter(&spec.name),
            );
        }
    }

    let expected_outputs = config.formula.output_names().len();
    if config.outputs.len() != expected_outputs {
        errors.push(ValidationError::new(
            ValidationErrorType::Shape,
            format!("{:?} produces {} outputs, {} declared.", config.formula, expected_outputs, config.outputs.len()),
        ));
    }

    let names = config.parameters.iter().map(|p| p.name.as_str()).chain(config.outputs.iter().map(|o| o.name.as_str()));
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(ValidationErrorType::Naming, "Names must not be empty."));
        } else if !seen.insert(name) {
            errors.push(
                ValidationError::new(ValidationErrorType::Naming, format!("Name '{}' is used more than once.", name))
                    .at_parameter(name),
            );
        }
    }
    errors
}

/// Lower bounds the closed-form formulas need.
///
/// Rates may reach zero (the kernel has an interest-free branch) but not go
/// negative; tenures must be strictly positive or amortization divides by zero.
pub(crate) fn validate_formula_domain(config: &ProductConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in &config.parameters {
        let min = spec.bounds.min;
        let violated = match spec.kind {
            FieldKind::Amount | FieldKind::Rate => min < 0.0,
            FieldKind::Tenure => min <= 0.0,
        };
        if violated {
            errors.push(
                ValidationError::new(
                    ValidationErrorType::FormulaDomain,
                    format!("Parameter '{}' admits {}, which {:?} is not defined for.", spec.name, min, config.formula),
                )
                .at_parameter(&spec.name),
            );
        }
    }
    errors
}
