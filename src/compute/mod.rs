//! The Formula Engine: pure product formulas plus the ledger of their last outputs.
pub mod engine;
pub mod kernel;
pub mod ledger;

pub use engine::Engine;
pub use kernel::Formula;
pub use ledger::{ComputationError, Ledger};
