//! End-to-end event sequences against the public calculator API.

use approx::assert_abs_diff_eq;
use fincalc_core::{Calculator, CalculatorError, CalculatorState, Channel, ProductConfig, ProductKind, SyncOutcome};
use rstest::rstest;

#[test]
fn test_emi_reference_scenario() {
    let mut emi = Calculator::new(ProductKind::Emi);
    emi.on_text_change("principal", "1000000").unwrap();
    emi.on_slider_change("interest_rate", 8.5).unwrap();
    emi.on_slider_change("tenure_years", 5.0).unwrap();

    let out = emi.get_derived_outputs();
    assert!(out.all_valid);
    assert_abs_diff_eq!(out.get("monthly_emi").unwrap(), 20516.53, epsilon = 0.01);
    assert_abs_diff_eq!(out.get("total_payment").unwrap(), 1_230_991.88, epsilon = 0.01);
    assert_abs_diff_eq!(out.get("total_interest").unwrap(), 230_991.88, epsilon = 0.01);

    let results = emi.results().unwrap();
    assert_eq!(results[0].label, "Monthly EMI");
    assert_eq!(results[0].text, "20,516.53");
}

#[test]
fn test_slider_repairs_invalid_rate_and_recomputes() {
    let mut emi = Calculator::new(ProductKind::Emi);
    let mounted = emi.output("monthly_emi").unwrap();

    emi.on_text_change("interest_rate", "50").unwrap();
    assert!(emi.get_parameter("interest_rate").unwrap().is_error);
    assert_eq!(emi.state(), CalculatorState::Invalid);
    assert_eq!(emi.output("monthly_emi").unwrap(), mounted);

    emi.on_slider_change("interest_rate", 15.0).unwrap();
    let rate = emi.get_parameter("interest_rate").unwrap();
    assert!(!rate.is_error);
    assert_eq!(rate.value, 15.0);
    assert_eq!(emi.state(), CalculatorState::Valid);
    assert!(emi.output("monthly_emi").unwrap() > mounted);
}

#[test]
fn test_commit_clamps_principal_to_minimum() {
    let mut emi = Calculator::new(ProductKind::Emi);

    emi.on_text_change("principal", "50").unwrap();
    let typed = emi.get_parameter("principal").unwrap();
    assert_eq!(typed.value, 50.0);
    assert_eq!(typed.display_value, 10_000.0);
    assert!(typed.is_error);
    assert_eq!(emi.field_errors()[0].to_string(), "Amount must be between ₹10,000 and ₹10,000,000");

    emi.on_text_commit("principal").unwrap();
    let committed = emi.get_parameter("principal").unwrap();
    assert_eq!(committed.value, 10_000.0);
    assert!(!committed.is_error);
    assert!(emi.get_derived_outputs().all_valid);
}

#[test]
fn test_cleared_lumpsum_principal_takes_fallback() {
    let mut lumpsum = Calculator::new(ProductKind::Lumpsum);
    let outcome = lumpsum.on_text_change("principal", "").unwrap();

    assert_eq!(outcome, SyncOutcome::Applied { value: 1000.0, valid: true });
    let principal = lumpsum.get_parameter("principal").unwrap();
    assert_eq!(principal.value, 1000.0);
    assert!(!principal.is_error);
    assert_abs_diff_eq!(lumpsum.output("future_value").unwrap(), 1000.0 * 1.12f64.powi(5), epsilon = 1e-9);
}

#[rstest]
#[case(ProductKind::Emi, "principal", "12a")]
#[case(ProductKind::Loan, "tenure_years", ".5")]
#[case(ProductKind::Sip, "expected_return", ".")]
#[case(ProductKind::Lumpsum, "time_period_years", "-")]
fn test_unparsable_text_changes_nothing(#[case] kind: ProductKind, #[case] name: &str, #[case] raw: &str) {
    let mut calc = Calculator::new(kind);
    calc.on_text_change(name, "9999999999").unwrap();
    let before = calc.snapshot();

    assert_eq!(calc.on_text_change(name, raw).unwrap(), SyncOutcome::Ignored);
    assert_eq!(calc.snapshot(), before);
}

#[test]
fn test_decimal_tenure_text_keeps_whole_years() {
    let mut emi = Calculator::new(ProductKind::Emi);
    let outcome = emi.on_text_change("tenure_years", "7.5").unwrap();

    assert_eq!(outcome, SyncOutcome::Applied { value: 7.0, valid: true });
    assert_eq!(emi.get_parameter("tenure_years").unwrap().value, 7.0);
    assert_eq!(emi.revision(), 2);
}

#[rstest]
#[case(ProductKind::Emi, "principal", 10_000.0)]
#[case(ProductKind::Emi, "interest_rate", 1.0)]
#[case(ProductKind::Emi, "tenure_years", 1.0)]
#[case(ProductKind::Loan, "loan_amount", 100_000.0)]
#[case(ProductKind::Loan, "interest_rate", 1.0)]
#[case(ProductKind::Loan, "tenure_years", 1.0)]
#[case(ProductKind::Sip, "monthly_investment", 500.0)]
#[case(ProductKind::Sip, "expected_return", 1.0)]
#[case(ProductKind::Sip, "time_period_years", 1.0)]
#[case(ProductKind::Lumpsum, "principal", 1000.0)]
#[case(ProductKind::Lumpsum, "expected_return", 1.0)]
#[case(ProductKind::Lumpsum, "time_period_years", 1.0)]
fn test_cleared_field_takes_product_fallback(#[case] kind: ProductKind, #[case] name: &str, #[case] fallback: f64) {
    let mut calc = Calculator::new(kind);
    calc.on_text_change(name, "9999999").unwrap();

    assert_eq!(calc.on_text_change(name, "").unwrap(), SyncOutcome::Applied { value: fallback, valid: true });
    let view = calc.get_parameter(name).unwrap();
    assert_eq!(view.value, fallback);
    assert!(!view.is_error);
    assert_eq!(calc.state(), CalculatorState::Valid);
}

#[test]
fn test_text_back_in_range_returns_to_valid() {
    let mut sip = Calculator::new(ProductKind::Sip);
    sip.on_text_change("monthly_investment", "250").unwrap();
    assert_eq!(sip.state(), CalculatorState::Invalid);

    sip.on_text_change("monthly_investment", "2,500").unwrap();
    assert_eq!(sip.state(), CalculatorState::Valid);
    assert_eq!(sip.output("invested_amount").unwrap(), 2500.0 * 120.0);
}

#[test]
fn test_two_invalid_fields_need_two_repairs() {
    let mut loan = Calculator::new(ProductKind::Loan);
    loan.on_text_change("loan_amount", "5000").unwrap();
    loan.on_text_change("tenure_years", "35").unwrap();
    assert_eq!(loan.field_errors().len(), 2);

    loan.on_text_commit("loan_amount").unwrap();
    assert_eq!(loan.state(), CalculatorState::Invalid);
    assert_eq!(loan.revision(), 1);

    loan.handle(Channel::Commit, "tenure_years", "").unwrap();
    assert_eq!(loan.state(), CalculatorState::Valid);
    assert_eq!(loan.revision(), 2);
    assert_eq!(loan.get_parameter("tenure_years").unwrap().value, 30.0);
}

#[test]
fn test_instances_are_independent() {
    let mut a = Calculator::new(ProductKind::Emi);
    let b = Calculator::new(ProductKind::Emi);
    a.on_text_change("tenure_years", "99").unwrap();

    assert_eq!(a.state(), CalculatorState::Invalid);
    assert_eq!(b.state(), CalculatorState::Valid);
    assert_eq!(b.get_parameter("tenure_years").unwrap().value, 5.0);
}

#[test]
fn test_snapshot_json_for_presentation_layer() {
    let mut sip = Calculator::new(ProductKind::Sip);
    sip.on_text_change("time_period_years", "50").unwrap();

    let json: serde_json::Value = serde_json::from_str(&sip.snapshot_json().unwrap()).unwrap();
    assert_eq!(json["title"], "SIP Calculator");
    assert_eq!(json["state"], "invalid");
    assert_eq!(json["errors"][0], "Period must be between 1 and 40 years");
    assert!(json["results"].is_null());
    assert_eq!(json["parameters"][0]["summary"], "₹ 5,000");
    assert_eq!(json["parameters"][2]["display_value"], 40.0);
}

#[test]
fn test_custom_config_from_json() {
    let mut config = ProductKind::Emi.config();
    config.title = "Interest-free EMI".into();
    config.parameters[1].bounds.min = 0.0;
    let json = config.to_json().unwrap();

    let mut calc = Calculator::from_config(ProductConfig::from_json(&json).unwrap()).unwrap();
    calc.on_slider_change("interest_rate", 0.0).unwrap();
    calc.on_slider_change("principal", 120_000.0).unwrap();
    calc.on_slider_change("tenure_years", 1.0).unwrap();

    assert_eq!(calc.output("monthly_emi"), Some(10_000.0));
    assert_eq!(calc.output("total_interest"), Some(0.0));
}

#[test]
fn test_custom_config_rejected_before_mount() {
    let mut config = ProductKind::Sip.config();
    config.parameters[0].initial = 10.0;
    assert!(matches!(Calculator::from_config(config), Err(CalculatorError::InvalidConfig(_))));
}
