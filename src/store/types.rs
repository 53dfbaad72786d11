use serde::{Deserialize, Serialize};

/// Positional handle of a parameter inside a store (at most 256 slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ParamId(pub u8);

impl ParamId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    /// `None` past the last addressable slot.
    pub fn new(idx: usize) -> Option<Self> { u8::try_from(idx).ok().map(Self) }
}

/// How a field is typed, parsed, committed and labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Monetary amount. Accepts `,` separators, parses as an integer.
    Amount,
    /// Annual percentage. Parses as a float, rounds to 0.1 on commit.
    Rate,
    /// Whole years. Parses as an integer.
    Tenure,
}

impl FieldKind {
    /// Amount fields tolerate thousands separators in typed text.
    pub fn strips_separators(&self) -> bool {
        matches!(self, FieldKind::Amount)
    }

    pub fn parses_as_integer(&self) -> bool {
        matches!(self, FieldKind::Amount | FieldKind::Tenure)
    }

    /// Decimal places kept when a committed value is snapped into range.
    pub fn commit_precision(&self) -> Option<u32> {
        match self {
            FieldKind::Rate => Some(1),
            FieldKind::Amount | FieldKind::Tenure => None,
        }
    }
}

/// Inclusive range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// `f64::clamp` panics on inverted bounds; configs are validated before
    /// they reach a store, so min/max are applied directly here.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Static description of one calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Key used by the presentation layer (e.g. "interest_rate").
    pub name: String,
    /// Subject of the inline error message (e.g. "Rate").
    pub label: String,
    pub kind: FieldKind,
    pub bounds: Bounds,
    pub step: f64,
    /// Value adopted when the text field is cleared.
    pub fallback: f64,
    /// Value at mount time.
    pub initial: f64,
}

impl ParameterSpec {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        label: &str,
        kind: FieldKind,
        min: f64,
        max: f64,
        step: f64,
        fallback: f64,
        initial: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            bounds: Bounds::new(min, max),
            step,
            fallback,
            initial,
        }
    }
}
