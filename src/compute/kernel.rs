//! Closed-form formulas behind each calculator. All inputs are full-precision
//! stored values; rounding happens only at display time.
use crate::store::Column;
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// The formula a product runs once its inputs are valid.
///
/// Every formula takes `[amount, annual_rate_percent, years]` positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Equated monthly instalment on a reducing balance (EMI and Loan).
    Amortization,
    /// Monthly contributions compounded monthly, paid at period start (SIP).
    SystematicInvestment,
    /// One-off investment compounded annually.
    Lumpsum,
}

impl Formula {
    pub const ARITY: usize = 3;

    /// Output names in the order `evaluate` produces them.
    pub fn output_names(&self) -> &'static [&'static str] {
        match self {
            Formula::Amortization => &["monthly_emi", "total_interest", "total_payment"],
            Formula::SystematicInvestment => &["invested_amount", "estimated_returns", "total_value"],
            Formula::Lumpsum => &["future_value", "wealth_gain"],
        }
    }
}

#[inline]
fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Returns `[monthly_emi, total_interest, total_payment]`.
pub fn amortization(principal: f64, annual_rate_percent: f64, years: f64) -> [f64; 3] {
    let r = monthly_rate(annual_rate_percent);
    let n = years * 12.0;

    let emi = if r == 0.0 {
        // Interest-free: straight division of the principal.
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };

    let total_payment = emi * n;
    let total_interest = total_payment - principal;
    [emi, total_interest, total_payment]
}

/// Returns `[invested_amount, estimated_returns, total_value]`.
pub fn systematic_investment(monthly: f64, annual_rate_percent: f64, years: f64) -> [f64; 3] {
    let n = years * 12.0;
    let r = monthly_rate(annual_rate_percent);

    let future_value = if r == 0.0 {
        monthly * n
    } else {
        monthly * ((1.0 + r).powf(n) - 1.0) * (1.0 + r) / r
    };

    let invested = monthly * n;
    let returns = future_value - invested;
    [invested, returns, future_value]
}

/// Returns `[future_value, wealth_gain]`.
pub fn lumpsum(principal: f64, annual_rate_percent: f64, years: f64) -> [f64; 2] {
    let future_value = principal * (1.0 + annual_rate_percent / 100.0).powf(years);
    [future_value, future_value - principal]
}

/// Dispatches to the formula. `inputs` must hold exactly [`Formula::ARITY`] values.
#[inline]
pub fn evaluate(formula: Formula, inputs: &[f64]) -> Column<f64> {
    let (a, b, c) = (inputs[0], inputs[1], inputs[2]);
    match formula {
        Formula::Amortization => {
            let [x, y, z] = amortization(a, b, c);
            smallvec![x, y, z]
        }
        Formula::SystematicInvestment => {
            let [x, y, z] = systematic_investment(a, b, c);
            smallvec![x, y, z]
        }
        Formula::Lumpsum => {
            let [x, y] = lumpsum(a, b, c);
            smallvec![x, y]
        }
    }
}
