use crate::store::Column;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    #[error("Formula expects {expected} inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("Output '{output}' is not a finite number")]
    NonFinite { output: String },
}

/// Holds the last computed outputs of a calculator.
///
/// Values are only ever replaced wholesale by a successful recompute, so a
/// ledger is either untouched or carries one complete, consistent result.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    names: Column<String>,
    values: Column<f64>,
    /// Set while the inputs are invalid and `values` reflect an earlier state.
    frozen: bool,
    /// Number of successful recomputes since the ledger was created.
    revision: u64,
}

impl Ledger {
    pub fn new() -> Self { Self::default() }

    pub fn with_outputs<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
            values: names.iter().map(|_| 0.0).collect(),
            frozen: false,
            revision: 0,
        }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn is_frozen(&self) -> bool { self.frozen }
    pub fn revision(&self) -> u64 { self.revision }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names.iter().position(|n| n == name).map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    /// Replaces every value at once and thaws the ledger.
    pub fn commit(&mut self, values: Column<f64>) -> Result<(), ComputationError> {
        if values.len() != self.names.len() {
            return Err(ComputationError::ArityMismatch { expected: self.names.len(), actual: values.len() });
        }
        self.values = values;
        self.frozen = false;
        self.revision += 1;
        Ok(())
    }

    /// Keeps the current values but marks them as belonging to an earlier state.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_commit_then_freeze_keeps_values() {
        let mut ledger = Ledger::with_outputs(&["future_value", "wealth_gain"]);
        ledger.commit(smallvec![110.0, 10.0]).unwrap();
        ledger.freeze();

        assert!(ledger.is_frozen());
        assert_eq!(ledger.get("future_value"), Some(110.0));
        assert_eq!(ledger.revision(), 1);

        ledger.commit(smallvec![121.0, 21.0]).unwrap();
        assert!(!ledger.is_frozen());
        assert_eq!(ledger.get("wealth_gain"), Some(21.0));
        assert_eq!(ledger.revision(), 2);
    }

    #[test]
    fn test_commit_rejects_wrong_width() {
        let mut ledger = Ledger::with_outputs(&["a", "b"]);
        let err = ledger.commit(smallvec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, ComputationError::ArityMismatch { expected: 2, actual: 3 });
        assert_eq!(ledger.revision(), 0);
    }
}
