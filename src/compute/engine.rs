use crate::compute::kernel::{self, Formula};
use crate::compute::ledger::{ComputationError, Ledger};
use crate::store::Column;
use tracing::trace;

pub struct Engine;

impl Engine {
    /// Evaluates `formula` over `inputs` and commits the outputs to the ledger.
    ///
    /// The ledger is left untouched on any error, so a failed run behaves like a
    /// frozen one from the caller's point of view.
    pub fn run(formula: Formula, inputs: &[f64], ledger: &mut Ledger) -> Result<(), ComputationError> {
        let outputs = Self::evaluate(formula, inputs)?;
        ledger.commit(outputs)?;
        trace!(?formula, revision = ledger.revision(), "outputs recomputed");
        Ok(())
    }

    /// Pure evaluation with input and output checks; no ledger involved.
    pub fn evaluate(formula: Formula, inputs: &[f64]) -> Result<Column<f64>, ComputationError> {
        if inputs.len() != Formula::ARITY {
            return Err(ComputationError::ArityMismatch { expected: Formula::ARITY, actual: inputs.len() });
        }

        let outputs = kernel::evaluate(formula, inputs);

        if let Some(i) = outputs.iter().position(|v| !v.is_finite()) {
            return Err(ComputationError::NonFinite { output: formula.output_names()[i].to_string() });
        }
        Ok(outputs)
    }
}
