//! Read-only views of a calculator handed to the presentation layer.
use serde::Serialize;

/// The two states a calculator can rest in between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorState {
    /// Every parameter is in range and outputs reflect the current inputs.
    Valid,
    /// At least one live text edit left a parameter out of range; outputs are frozen.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterView {
    pub name: String,
    /// Raw stored value, shown as-is in the text field.
    pub value: f64,
    /// Slider position: `value` clamped into bounds.
    pub display_value: f64,
    pub is_error: bool,
    /// Label under the field, e.g. `₹ 100,000`.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedOutputs {
    pub all_valid: bool,
    /// Last computed values in declaration order, full precision.
    pub outputs: Vec<(String, f64)>,
}

impl DerivedOutputs {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.outputs.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}

/// One row of the results panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultLine {
    pub label: String,
    pub value: f64,
    /// `value` rendered with two decimals and grouping.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorSnapshot {
    pub title: String,
    pub state: CalculatorState,
    pub parameters: Vec<ParameterView>,
    /// Inline messages for flagged fields, in parameter order.
    pub errors: Vec<String>,
    pub outputs: DerivedOutputs,
    /// `None` while the results panel is replaced by the messages above.
    pub results: Option<Vec<ResultLine>>,
}
