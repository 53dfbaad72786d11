//! Text rendering of amounts, rates and tenures.
use crate::store::FieldKind;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Groups the integer part of `value` with `,` every three digits.
///
/// The number is first rendered with the shortest round-trip representation,
/// so `1234.5` becomes `"1,234.5"` and `-1000000.0` becomes `"-1,000,000"`.
pub fn format_thousands(value: f64) -> String {
    group_digits(&value.to_string())
}

/// Inserts separators into the integer digits of an already rendered number.
/// Anything that is not `[-]digits[.fraction]` (e.g. `inf`) is returned as is.
pub fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push_str(fraction);
    out
}

/// Two fixed decimals, no grouping (`20516.53`).
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Two fixed decimals with grouping (`1,230,991.88`).
pub fn format_money(value: f64) -> String {
    group_digits(&format_fixed2(value))
}

/// A bound as it appears inside a range message: `₹10,000`, `20%`, `30`.
pub fn format_bound(kind: FieldKind, value: f64) -> String {
    match kind {
        FieldKind::Amount => format!("{}{}", CURRENCY_SYMBOL, format_thousands(value)),
        FieldKind::Rate => format!("{}%", value),
        FieldKind::Tenure => value.to_string(),
    }
}

/// The summary label shown under a field: `₹ 100,000`, `8.5%`, `5 years`.
pub fn format_summary(kind: FieldKind, value: f64) -> String {
    match kind {
        FieldKind::Amount => format!("{} {}", CURRENCY_SYMBOL, format_thousands(value)),
        FieldKind::Rate => format!("{}%", value),
        FieldKind::Tenure => format!("{} years", value),
    }
}
