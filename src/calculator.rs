//! A calculator instance: parameter store, sync controller, validator gate and
//! formula engine wired together.
//!
//! Every mutator follows the same sequence, synchronously:
//! 1. the Sync Controller writes one value and its validity flag,
//! 2. the combined gate is read over all flags,
//! 3. only if it holds, the Formula Engine recomputes every output at once.
//!
//! The engine therefore never sees a half-updated parameter set.
use crate::compute::{ComputationError, Engine, Formula, Ledger};
use crate::config::{OutputSpec, ProductConfig, ProductKind};
use crate::display::format::{format_money, format_summary};
use crate::display::{CalculatorSnapshot, CalculatorState, DerivedOutputs, ParameterView, ResultLine};
use crate::error::CalculatorError;
use crate::store::{FieldKind, ParamId, ParameterStore};
use crate::sync::{Channel, SyncController, SyncOutcome};
use crate::validation::{self, OutOfRangeParameter};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Calculator {
    title: String,
    formula: Formula,
    outputs: Vec<OutputSpec>,
    store: ParameterStore,
    ledger: Ledger,
}

impl Calculator {
    /// Mounts one of the built-in calculators with its initial values and
    /// computes its outputs.
    pub fn new(kind: ProductKind) -> Self {
        let mut calc = Self::assemble(kind.config());
        calc.refresh();
        calc
    }

    /// Mounts a calculator from a custom configuration.
    pub fn from_config(config: ProductConfig) -> Result<Self, CalculatorError> {
        config.validate()?;
        let mut calc = Self::assemble(config);
        calc.recompute()?;
        Ok(calc)
    }

    fn assemble(config: ProductConfig) -> Self {
        let ledger = Ledger::with_outputs(&config.outputs.iter().map(|o| o.name.as_str()).collect::<Vec<_>>());
        Self {
            store: ParameterStore::from_specs(&config.parameters),
            title: config.title,
            formula: config.formula,
            outputs: config.outputs,
            ledger,
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn formula(&self) -> Formula { self.formula }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.store.specs.iter().map(|s| s.name.as_str())
    }

    fn id(&self, name: &str) -> Result<ParamId, CalculatorError> {
        self.store.lookup(name).ok_or_else(|| CalculatorError::UnknownParameter(name.to_string()))
    }

    // --- Mutators ---

    pub fn on_slider_change(&mut self, name: &str, value: f64) -> Result<SyncOutcome, CalculatorError> {
        let id = self.id(name)?;
        let outcome = SyncController::slider(&mut self.store, id, value);
        Ok(self.settle(id, Channel::Slider, outcome))
    }

    pub fn on_text_change(&mut self, name: &str, raw: &str) -> Result<SyncOutcome, CalculatorError> {
        let id = self.id(name)?;
        let outcome = SyncController::text(&mut self.store, id, raw);
        Ok(self.settle(id, Channel::Text, outcome))
    }

    pub fn on_text_commit(&mut self, name: &str) -> Result<SyncOutcome, CalculatorError> {
        let id = self.id(name)?;
        let outcome = SyncController::commit(&mut self.store, id);
        Ok(self.settle(id, Channel::Commit, outcome))
    }

    /// Routes a raw event by channel; slider payloads are parsed as numbers.
    pub fn handle(&mut self, channel: Channel, name: &str, raw: &str) -> Result<SyncOutcome, CalculatorError> {
        let id = self.id(name)?;
        let outcome = SyncController::apply(&mut self.store, id, channel, raw);
        Ok(self.settle(id, channel, outcome))
    }

    /// Runs after the store has settled for one event.
    fn settle(&mut self, id: ParamId, channel: Channel, outcome: SyncOutcome) -> SyncOutcome {
        debug!(calculator = %self.title, parameter = %self.store.spec(id).name, ?channel, ?outcome, "input event");
        if outcome.is_applied() {
            self.refresh();
        }
        outcome
    }

    /// Evaluates the gate and recomputes if it holds, logging instead of
    /// failing: an event handler has no caller to report to.
    fn refresh(&mut self) {
        if let Err(e) = self.recompute() {
            warn!(calculator = %self.title, error = %e, "recompute failed, outputs frozen");
            self.ledger.freeze();
        }
    }

    /// The explicit recompute step. Returns whether outputs were replaced.
    ///
    /// With any field invalid, the ledger is frozen at its last values.
    pub fn recompute(&mut self) -> Result<bool, ComputationError> {
        if !validation::all_valid(&self.store) {
            self.ledger.freeze();
            return Ok(false);
        }
        Engine::run(self.formula, &self.store.values, &mut self.ledger)?;
        Ok(true)
    }

    // --- Queries ---

    pub fn get_parameter(&self, name: &str) -> Result<ParameterView, CalculatorError> {
        let id = self.id(name)?;
        Ok(self.view(id))
    }

    fn view(&self, id: ParamId) -> ParameterView {
        let spec = self.store.spec(id);
        let value = self.store.value(id);
        ParameterView {
            name: spec.name.clone(),
            value,
            display_value: SyncController::display_value(&self.store, id),
            is_error: !self.store.is_valid(id),
            summary: format_summary(spec.kind, value),
        }
    }

    pub fn parameters(&self) -> Vec<ParameterView> {
        self.store.ids().map(|id| self.view(id)).collect()
    }

    pub fn all_valid(&self) -> bool {
        validation::all_valid(&self.store)
    }

    pub fn state(&self) -> CalculatorState {
        if self.all_valid() { CalculatorState::Valid } else { CalculatorState::Invalid }
    }

    pub fn field_errors(&self) -> Vec<OutOfRangeParameter> {
        validation::field_errors(&self.store)
    }

    pub fn get_derived_outputs(&self) -> DerivedOutputs {
        DerivedOutputs {
            all_valid: self.all_valid(),
            outputs: self.ledger.iter().map(|(n, v)| (n.to_string(), v)).collect(),
        }
    }

    pub fn output(&self, name: &str) -> Option<f64> {
        self.ledger.get(name)
    }

    /// Number of successful recomputes, including the one at mount.
    pub fn revision(&self) -> u64 {
        self.ledger.revision()
    }

    /// Rows of the results panel, or `None` while any field is invalid.
    ///
    /// The lumpsum panel leads with the invested amount, which is the principal itself.
    pub fn results(&self) -> Option<Vec<ResultLine>> {
        if !self.all_valid() {
            return None;
        }
        let line = |label: &str, value: f64| ResultLine { label: label.to_string(), value, text: format_money(value) };

        let mut lines = Vec::with_capacity(self.outputs.len() + 1);
        if self.formula == Formula::Lumpsum {
            if let Some(amount) = self.store.ids().find(|&id| self.store.spec(id).kind == FieldKind::Amount) {
                lines.push(line("Invested Amount", self.store.value(amount)));
            }
        }
        // The lumpsum panel lists the gain before the future value.
        let mut rows: Vec<(&OutputSpec, f64)> = self.outputs.iter().zip(self.ledger.iter().map(|(_, v)| v)).collect();
        if self.formula == Formula::Lumpsum {
            rows.reverse();
        }
        lines.extend(rows.into_iter().map(|(spec, value)| line(spec.label.as_str(), value)));
        Some(lines)
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            title: self.title.clone(),
            state: self.state(),
            parameters: self.parameters(),
            errors: self.field_errors().iter().map(|e| e.to_string()).collect(),
            outputs: self.get_derived_outputs(),
            results: self.results(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, CalculatorError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mount_computes_initial_outputs() {
        let calc = Calculator::new(ProductKind::Emi);
        assert_eq!(calc.state(), CalculatorState::Valid);
        assert_eq!(calc.revision(), 1);
        assert_abs_diff_eq!(calc.output("monthly_emi").unwrap(), 2051.65, epsilon = 0.01);
    }

    #[test]
    fn test_invalid_text_freezes_outputs() {
        let mut calc = Calculator::new(ProductKind::Loan);
        let before = calc.get_derived_outputs();

        calc.on_text_change("tenure_years", "45").unwrap();
        let after = calc.get_derived_outputs();

        assert!(!after.all_valid);
        assert_eq!(after.outputs, before.outputs);
        assert_eq!(calc.revision(), 1);
        assert!(calc.results().is_none());
        assert_eq!(calc.field_errors()[0].to_string(), "Tenure must be between 1 and 30 years");
    }

    #[test]
    fn test_ignored_event_does_not_recompute() {
        let mut calc = Calculator::new(ProductKind::Sip);
        let outcome = calc.on_text_change("expected_return", "-").unwrap();
        assert_eq!(outcome, SyncOutcome::Ignored);
        assert_eq!(calc.revision(), 1);
    }

    #[test]
    fn test_unknown_parameter() {
        let mut calc = Calculator::new(ProductKind::Emi);
        let err = calc.on_slider_change("loan_amount", 200_000.0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown parameter 'loan_amount'");
        assert!(calc.get_parameter("nope").is_err());
    }

    #[test]
    fn test_lumpsum_results_panel_order() {
        let calc = Calculator::new(ProductKind::Lumpsum);
        let labels: Vec<_> = calc.results().unwrap().into_iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Invested Amount", "Estimated Returns", "Total Future Value"]);
    }

    #[test]
    fn test_handle_routes_raw_events() {
        let mut calc = Calculator::new(ProductKind::Emi);
        calc.handle(Channel::Text, "principal", "2,00,000").unwrap();
        assert_eq!(calc.get_parameter("principal").unwrap().value, 200_000.0);
        calc.handle(Channel::Slider, "tenure_years", "10").unwrap();
        assert_eq!(calc.get_parameter("tenure_years").unwrap().value, 10.0);
        assert_eq!(calc.revision(), 3);
    }
}
