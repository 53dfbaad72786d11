//! Parameter storage: field descriptions and the per-instance value/validity columns.
pub mod registry;
pub mod types;

pub use registry::{Column, ParameterStore};
pub use types::{Bounds, FieldKind, ParamId, ParameterSpec};
