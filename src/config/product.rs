//! Per-product configuration: the bounds table and formula a calculator runs.
use super::presets;
use crate::compute::Formula;
use crate::error::CalculatorError;
use crate::store::ParameterSpec;
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four calculators offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Emi,
    Sip,
    Lumpsum,
    Loan,
}

impl ProductKind {
    /// Tab order of the calculators page.
    pub const ALL: [ProductKind; 4] = [ProductKind::Emi, ProductKind::Sip, ProductKind::Lumpsum, ProductKind::Loan];

    pub fn key(&self) -> &'static str {
        match self {
            ProductKind::Emi => "emi",
            ProductKind::Sip => "sip",
            ProductKind::Lumpsum => "lumpsum",
            ProductKind::Loan => "loan",
        }
    }

    /// The built-in configuration for this product.
    pub fn config(&self) -> ProductConfig {
        match self {
            ProductKind::Emi => presets::emi(),
            ProductKind::Loan => presets::loan(),
            ProductKind::Sip => presets::sip(),
            ProductKind::Lumpsum => presets::lumpsum(),
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductKind {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductKind::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalculatorError::UnknownProduct(s.to_string()))
    }
}

/// Name and panel label of one derived output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub name: String,
    pub label: String,
}

impl OutputSpec {
    pub fn new(name: &str, label: &str) -> Self {
        Self { name: name.to_string(), label: label.to_string() }
    }
}

/// Everything that distinguishes one calculator from another.
///
/// Parameters are positional: `[amount, rate, tenure]`, matching the inputs
/// every [`Formula`] expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub title: String,
    pub formula: Formula,
    pub parameters: Vec<ParameterSpec>,
    pub outputs: Vec<OutputSpec>,
}

impl ProductConfig {
    /// Parses a configuration from JSON and checks it before returning it.
    pub fn from_json(json: &str) -> Result<Self, CalculatorError> {
        let config: ProductConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, CalculatorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Runs every configuration rule and reports all violations together.
    pub fn validate(&self) -> Result<(), CalculatorError> {
        Validator::new(self).validate().map_err(CalculatorError::InvalidConfig)
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
