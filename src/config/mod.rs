//! Product configuration: built-in presets and JSON-loaded custom tables.
pub mod presets;
pub mod product;

pub use product::{OutputSpec, ProductConfig, ProductKind};
