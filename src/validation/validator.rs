//! The central validator: configuration checks before a calculator is built,
//! and the per-field gate evaluated after every edit.
use super::error::{OutOfRangeParameter, ValidationError};
use super::rules::{domain, range};
use crate::config::ProductConfig;
use crate::store::{ParameterSpec, ParameterStore};

/// Checks a product configuration, collecting every problem rather than
/// stopping at the first, so a hand-written table can be fixed in one pass.
pub struct Validator<'a> {
    config: &'a ProductConfig,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a ProductConfig) -> Self {
        Self { config }
    }

    /// # Returns
    /// - `Ok(())` if the configuration can back a calculator.
    /// - `Err(Vec<ValidationError>)` with all errors found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = domain::validate_shape(self.config);

        for spec in &self.config.parameters {
            errors.extend(range::validate_spec(spec));
        }
        errors.extend(domain::validate_formula_domain(self.config));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The field validity predicate: `min <= value <= max`.
pub fn is_field_valid(spec: &ParameterSpec, value: f64) -> bool {
    range::is_within(spec, value)
}

/// The combined gate: every stored validity flag is set.
///
/// Reads the flags rather than re-deriving them, since slider and commit paths
/// force a flag to `true` independently of the text rule.
pub fn all_valid(store: &ParameterStore) -> bool {
    store.validity.iter().all(|&v| v)
}

/// One entry per flagged field, in parameter order.
pub fn field_errors(store: &ParameterStore) -> Vec<OutOfRangeParameter> {
    store
        .ids()
        .filter(|&id| !store.is_valid(id))
        .filter_map(|id| range::check_value(store.spec(id), store.value(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProductKind;
    use crate::validation::ValidationErrorType;

    #[test]
    fn test_all_errors_collected() {
        let mut config = ProductKind::Emi.config();
        config.parameters[0].step = 0.0;
        config.parameters[2].bounds.min = -1.0;
        config.parameters.push(config.parameters[0].clone());

        let errors = Validator::new(&config).validate().unwrap_err();
        let types: Vec<_> = errors.iter().map(|e| e.error_type.clone()).collect();
        assert!(types.contains(&ValidationErrorType::Shape));
        assert!(types.contains(&ValidationErrorType::Naming));
        assert!(types.contains(&ValidationErrorType::Bounds));
        assert!(types.contains(&ValidationErrorType::FormulaDomain));
    }

    #[test]
    fn test_gate_follows_flags() {
        let mut store = ParameterStore::from_specs(&ProductKind::Sip.config().parameters);
        assert!(all_valid(&store));
        assert!(field_errors(&store).is_empty());

        let id = store.lookup("expected_return").unwrap();
        store.set(id, 45.0, false);
        assert!(!all_valid(&store));
        assert!(!is_field_valid(store.spec(id), store.value(id)));

        let errors = field_errors(&store);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Rate must be between 1% and 30%");
    }
}
