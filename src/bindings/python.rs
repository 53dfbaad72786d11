// FFI Facade: lets a Python presentation layer drive a calculator.
// Defines the `_core` Python module; each view holds one `_Calculator`
// and forwards raw widget events to it.

use crate::calculator::Calculator;
use crate::config::{ProductConfig, ProductKind};
use crate::display;
use crate::error::CalculatorError;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: CalculatorError) -> PyErr {
    match err {
        CalculatorError::UnknownParameter(_) => PyKeyError::new_err(err.to_string()),
        CalculatorError::UnknownProduct(_) | CalculatorError::InvalidConfig(_) | CalculatorError::Json(_) => {
            PyValueError::new_err(err.to_string())
        }
        CalculatorError::Computation(_) => PyRuntimeError::new_err(err.to_string()),
    }
}

#[pyclass(name = "_Calculator")]
#[derive(Debug, Clone)]
pub struct PyCalculator {
    inner: Calculator,
}

#[pymethods]
impl PyCalculator {
    /// Mounts a built-in calculator by tab key: "emi", "sip", "lumpsum" or "loan".
    #[new]
    pub fn new(kind: &str) -> PyResult<Self> {
        let kind: ProductKind = kind.parse().map_err(to_py_err)?;
        Ok(Self { inner: Calculator::new(kind) })
    }

    #[staticmethod]
    pub fn from_json(config: &str) -> PyResult<Self> {
        let config = ProductConfig::from_json(config).map_err(to_py_err)?;
        Calculator::from_config(config).map(|inner| Self { inner }).map_err(to_py_err)
    }

    pub fn title(&self) -> String { self.inner.title().to_string() }

    /// Returns `(value, display_value, is_error)`.
    pub fn get_parameter(&self, name: &str) -> PyResult<(f64, f64, bool)> {
        let view = self.inner.get_parameter(name).map_err(to_py_err)?;
        Ok((view.value, view.display_value, view.is_error))
    }

    /// Returns whether the event changed state.
    pub fn on_slider_change(&mut self, name: &str, value: f64) -> PyResult<bool> {
        self.inner.on_slider_change(name, value).map(|o| o.is_applied()).map_err(to_py_err)
    }

    pub fn on_text_change(&mut self, name: &str, raw: &str) -> PyResult<bool> {
        self.inner.on_text_change(name, raw).map(|o| o.is_applied()).map_err(to_py_err)
    }

    pub fn on_text_commit(&mut self, name: &str) -> PyResult<bool> {
        self.inner.on_text_commit(name).map(|o| o.is_applied()).map_err(to_py_err)
    }

    /// Returns `(all_valid, [(name, value), ...])`.
    pub fn get_derived_outputs(&self) -> (bool, Vec<(String, f64)>) {
        let d = self.inner.get_derived_outputs();
        (d.all_valid, d.outputs)
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.inner.field_errors().iter().map(|e| e.to_string()).collect()
    }

    pub fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot_json().map_err(to_py_err)
    }
}

#[pyfunction]
fn format_thousands(value: f64) -> String {
    display::format_thousands(value)
}

#[pyfunction]
fn calculator_kinds() -> Vec<&'static str> {
    ProductKind::ALL.iter().map(|k| k.key()).collect()
}

// --- Module Definition ---
/// The name `_core` marks this as the compiled component behind the Python package.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCalculator>()?;
    m.add_function(wrap_pyfunction!(format_thousands, m)?)?;
    m.add_function(wrap_pyfunction!(calculator_kinds, m)?)?;
    Ok(())
}
