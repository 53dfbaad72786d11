//! Range rules: the per-field validity predicate and the bounds checks on a
//! parameter description.

use crate::store::ParameterSpec;
use crate::validation::error::{OutOfRangeParameter, ValidationError, ValidationErrorType};

/// The field validity predicate: `min <= value <= max`.
#[inline]
pub(crate) fn is_within(spec: &ParameterSpec, value: f64) -> bool {
    spec.bounds.contains(value)
}

/// Describes `value` as out of range for `spec`, or `None` when it fits.
pub(crate) fn check_value(spec: &ParameterSpec, value: f64) -> Option<OutOfRangeParameter> {
    if is_within(spec, value) {
        return None;
    }
    Some(OutOfRangeParameter {
        name: spec.name.clone(),
        label: spec.label.clone(),
        kind: spec.kind,
        bounds: spec.bounds,
    })
}

/// Checks that a parameter description is internally consistent.
///
/// A store built from a spec that passes this rule starts valid, and its slider
/// and commit paths can always produce an in-range value.
pub(crate) fn validate_spec(spec: &ParameterSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let err = |t: ValidationErrorType, msg: String| ValidationError::new(t, msg).at_parameter(&spec.name);

    let numbers = [
        ("min", spec.bounds.min),
        ("max", spec.bounds.max),
        ("step", spec.step),
        ("fallback", spec.fallback),
        ("initial", spec.initial),
    ];
    let non_finite: Vec<&str> = numbers.iter().filter(|(_, v)| !v.is_finite()).map(|(n, _)| *n).collect();
    if !non_finite.is_empty() {
        errors.push(err(
            ValidationErrorType::NonFinite,
            format!("Parameter '{}' has non-finite {:?}.", spec.name, non_finite),
        ));
        // Ordering checks are meaningless on NaN.
        return errors;
    }

    if spec.bounds.min > spec.bounds.max {
        errors.push(err(
            ValidationErrorType::Bounds,
            format!("Parameter '{}' has min {} above max {}.", spec.name, spec.bounds.min, spec.bounds.max),
        ));
    }
    if spec.step <= 0.0 {
        errors.push(err(
            ValidationErrorType::Bounds,
            format!("Parameter '{}' has non-positive step {}.", spec.name, spec.step),
        ));
    }
    if !is_within(spec, spec.fallback) {
        errors.push(err(
            ValidationErrorType::DefaultOutOfRange,
            format!("Parameter '{}' falls back to {}, outside its bounds.", spec.name, spec.fallback),
        ));
    }
    if !is_within(spec, spec.initial) {
        errors.push(err(
            ValidationErrorType::DefaultOutOfRange,
            format!("Parameter '{}' starts at {}, outside its bounds.", spec.name, spec.initial),
        ));
    }
    errors
}
