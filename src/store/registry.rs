use super::types::*;
use smallvec::SmallVec;
use tracing::warn;

/// Inline storage sized for the three inputs every calculator carries.
pub type Column<T> = SmallVec<[T; 3]>;

/// The Parameter Store: one authoritative value per field plus its validity flag.
///
/// Columnar like the rest of the engine: `specs[i]`, `values[i]` and
/// `validity[i]` all describe the parameter with `ParamId(i)`.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    pub specs: Column<ParameterSpec>,
    pub values: Column<f64>,
    pub validity: Column<bool>,
}

impl ParameterStore {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.specs.len() }

    /// Builds a store whose values start at each spec's `initial`, all valid.
    pub fn from_specs(specs: &[ParameterSpec]) -> Self {
        let mut store = Self::new();
        for spec in specs {
            if store.add_parameter(spec.clone()).is_none() {
                warn!(dropped = specs.len() - store.count(), "parameter store full, remaining specs dropped");
                break;
            }
        }
        store
    }

    /// Appends a parameter, or returns `None` once every `ParamId` is taken.
    pub fn add_parameter(&mut self, spec: ParameterSpec) -> Option<ParamId> {
        let id = ParamId::new(self.specs.len())?;
        self.values.push(spec.initial);
        self.validity.push(true);
        self.specs.push(spec);
        Some(id)
    }

    pub fn lookup(&self, name: &str) -> Option<ParamId> {
        self.specs.iter().position(|s| s.name == name).and_then(ParamId::new)
    }

    #[inline(always)]
    pub fn spec(&self, id: ParamId) -> &ParameterSpec { &self.specs[id.index()] }

    #[inline(always)]
    pub fn value(&self, id: ParamId) -> f64 { self.values[id.index()] }

    #[inline(always)]
    pub fn is_valid(&self, id: ParamId) -> bool { self.validity[id.index()] }

    /// Writes value and flag together so the pair is never observed half-updated.
    pub fn set(&mut self, id: ParamId, value: f64, valid: bool) {
        let idx = id.index();
        self.values[idx] = value;
        self.validity[idx] = valid;
    }

    pub fn ids(&self) -> impl Iterator<Item = ParamId> {
        (0..self.count()).filter_map(ParamId::new)
    }
}
