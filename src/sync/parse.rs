//! Interpretation of raw text-field contents.
use crate::store::FieldKind;

/// What a text edit amounts to once parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextInput {
    /// The field was cleared; the parameter takes its fallback.
    Empty,
    /// A complete number, possibly out of range.
    Number(f64),
    /// An intermediate keystroke (`-`, `.`, `12a`) that must not touch state.
    Unparsable,
}

pub const THOUSANDS_SEPARATOR: char = ',';

/// Parses `raw` according to the field kind.
///
/// Amount fields drop `,` separators first. Emptiness is judged after that
/// step, so a lone separator clears an amount field. Whitespace around the
/// number is ignored, but whitespace alone is not treated as empty.
/// Amount and tenure fields take the integer part of a well-formed number
/// (`7.5` reads as 7); rate fields keep decimals.
/// Non-finite results (`inf`, `NaN`) are unparsable.
pub fn parse_text(kind: FieldKind, raw: &str) -> TextInput {
    let cleaned: String = if kind.strips_separators() {
        raw.chars().filter(|&c| c != THOUSANDS_SEPARATOR).collect()
    } else {
        raw.to_string()
    };

    if cleaned.is_empty() {
        return TextInput::Empty;
    }

    let digits = cleaned.trim();
    let parsed = if kind.parses_as_integer() {
        parse_integer(digits)
    } else {
        digits.parse::<f64>().ok()
    };

    match parsed {
        Some(value) if value.is_finite() => TextInput::Number(value),
        _ => TextInput::Unparsable,
    }
}

/// Truncates toward zero. The fraction, if any, must be plain digits.
fn parse_integer(digits: &str) -> Option<f64> {
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    whole.parse::<i64>().ok().map(|n| n as f64)
}
