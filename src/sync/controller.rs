//! The Sync Controller: reconciles slider, text and commit events into the
//! single stored value of a parameter.
use super::parse::{parse_text, TextInput};
use crate::store::{ParamId, ParameterStore};
use crate::validation::is_field_valid;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{debug, warn};

/// The input path an event arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Slider,
    Text,
    /// Focus left the text field.
    Commit,
}

/// Whether an event changed the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    Applied { value: f64, valid: bool },
    Ignored,
}

impl SyncOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SyncOutcome::Applied { .. })
    }
}

/// Direction of authority between the channels:
/// - the slider always lands on a valid value,
/// - live text may leave the field invalid,
/// - commit always repairs.
pub struct SyncController;

impl SyncController {
    pub fn apply(store: &mut ParameterStore, id: ParamId, channel: Channel, raw: &str) -> SyncOutcome {
        match channel {
            Channel::Slider => match raw.trim().parse::<f64>() {
                Ok(value) => Self::slider(store, id, value),
                Err(_) => SyncOutcome::Ignored,
            },
            Channel::Text => Self::text(store, id, raw),
            Channel::Commit => Self::commit(store, id),
        }
    }

    /// A range input reports a number within its own bounds. Anything outside
    /// is clamped so the slider path can never leave the field invalid.
    pub fn slider(store: &mut ParameterStore, id: ParamId, value: f64) -> SyncOutcome {
        let spec = store.spec(id);
        if !value.is_finite() {
            warn!(parameter = %spec.name, value, "ignoring non-finite slider value");
            return SyncOutcome::Ignored;
        }

        let clamped = spec.bounds.clamp(value);
        if clamped != value {
            debug!(parameter = %spec.name, value, clamped, "slider value outside bounds, clamped");
        }
        store.set(id, clamped, true);
        SyncOutcome::Applied { value: clamped, valid: true }
    }

    pub fn text(store: &mut ParameterStore, id: ParamId, raw: &str) -> SyncOutcome {
        let spec = store.spec(id);
        match parse_text(spec.kind, raw) {
            TextInput::Empty => {
                let fallback = spec.fallback;
                store.set(id, fallback, true);
                SyncOutcome::Applied { value: fallback, valid: true }
            }
            TextInput::Number(value) => {
                // Stored unclamped so the field keeps showing what was typed.
                let valid = is_field_valid(spec, value);
                store.set(id, value, valid);
                SyncOutcome::Applied { value, valid }
            }
            TextInput::Unparsable => {
                debug!(parameter = %spec.name, raw, "partial text input ignored");
                SyncOutcome::Ignored
            }
        }
    }

    /// Snaps the value into bounds; rate fields also round to one decimal.
    pub fn commit(store: &mut ParameterStore, id: ParamId) -> SyncOutcome {
        let spec = store.spec(id);
        let mut value = spec.bounds.clamp(store.value(id));
        if let Some(places) = spec.kind.commit_precision() {
            // Re-clamp: rounding may step past a bound that is not itself on the grid.
            value = spec.bounds.clamp(round_to(value, places));
        }
        store.set(id, value, true);
        SyncOutcome::Applied { value, valid: true }
    }

    /// Where the slider thumb sits: the stored value clamped into bounds.
    pub fn display_value(store: &ParameterStore, id: ParamId) -> f64 {
        store.spec(id).bounds.clamp(store.value(id))
    }
}

/// Rounds the exact decimal expansion of `value` half away from zero.
///
/// `1.15` is stored as `1.1499...` and rounds down to `1.1`; `1.25` is exact
/// and rounds up to `1.3`.
pub fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
