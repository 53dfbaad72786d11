//! Built-in bounds tables for the four calculators.
use super::product::{OutputSpec, ProductConfig};
use crate::compute::Formula;
use crate::store::{FieldKind, ParameterSpec};

fn rate(name: &str, max: f64, step: f64, initial: f64) -> ParameterSpec {
    ParameterSpec::new(name, "Rate", FieldKind::Rate, 1.0, max, step, 1.0, initial)
}

fn years(name: &str, label: &str, max: f64, initial: f64) -> ParameterSpec {
    ParameterSpec::new(name, label, FieldKind::Tenure, 1.0, max, 1.0, 1.0, initial)
}

fn amortization_outputs() -> Vec<OutputSpec> {
    vec![
        OutputSpec::new("monthly_emi", "Monthly EMI"),
        OutputSpec::new("total_interest", "Total Interest"),
        OutputSpec::new("total_payment", "Total Payment"),
    ]
}

pub fn emi() -> ProductConfig {
    ProductConfig {
        title: "EMI Calculator".into(),
        formula: Formula::Amortization,
        parameters: vec![
            ParameterSpec::new("principal", "Amount", FieldKind::Amount, 10_000.0, 10_000_000.0, 10_000.0, 10_000.0, 100_000.0),
            rate("interest_rate", 20.0, 0.1, 8.5),
            years("tenure_years", "Tenure", 30.0, 5.0),
        ],
        outputs: amortization_outputs(),
    }
}

pub fn loan() -> ProductConfig {
    ProductConfig {
        title: "Loan Calculator".into(),
        formula: Formula::Amortization,
        parameters: vec![
            ParameterSpec::new("loan_amount", "Amount", FieldKind::Amount, 100_000.0, 10_000_000.0, 10_000.0, 100_000.0, 1_000_000.0),
            rate("interest_rate", 20.0, 0.1, 8.5),
            years("tenure_years", "Tenure", 30.0, 20.0),
        ],
        outputs: amortization_outputs(),
    }
}

pub fn sip() -> ProductConfig {
    ProductConfig {
        title: "SIP Calculator".into(),
        formula: Formula::SystematicInvestment,
        parameters: vec![
            ParameterSpec::new("monthly_investment", "Investment", FieldKind::Amount, 500.0, 100_000.0, 500.0, 500.0, 5000.0),
            rate("expected_return", 30.0, 0.5, 12.0),
            years("time_period_years", "Period", 40.0, 10.0),
        ],
        outputs: vec![
            OutputSpec::new("invested_amount", "Invested Amount"),
            OutputSpec::new("estimated_returns", "Estimated Returns"),
            OutputSpec::new("total_value", "Total Value"),
        ],
    }
}

pub fn lumpsum() -> ProductConfig {
    ProductConfig {
        title: "Lumpsum Investment Calculator".into(),
        formula: Formula::Lumpsum,
        parameters: vec![
            ParameterSpec::new("principal", "Amount", FieldKind::Amount, 1000.0, 10_000_000.0, 1000.0, 1000.0, 100_000.0),
            rate("expected_return", 30.0, 0.5, 12.0),
            years("time_period_years", "Period", 40.0, 5.0),
        ],
        outputs: vec![
            OutputSpec::new("future_value", "Total Future Value"),
            OutputSpec::new("wealth_gain", "Estimated Returns"),
        ],
    }
}
