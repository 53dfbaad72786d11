//! Two-channel input reconciliation.
pub mod controller;
pub mod parse;

pub use controller::{round_to, Channel, SyncController, SyncOutcome};
pub use parse::{parse_text, TextInput};
