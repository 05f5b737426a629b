//! Monetary helpers
//!
//! All amounts are `Decimal` values kept at [`SCALE`] decimal places. Rounding
//! happens at balance derivation and when a transfer amount is computed, so
//! every comparison against zero afterwards is exact.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by every amount
pub const SCALE: u32 = 2;

/// Round to [`SCALE`] decimal places, midpoint away from zero.
///
/// The result always carries exactly [`SCALE`] places (`30` → `30.00`).
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCALE);
    rounded
}

/// Subtract, clamping to `Decimal::MAX` / `Decimal::MIN` instead of overflowing
pub fn saturating_sub(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_sub(rhs)
        .unwrap_or(if lhs > rhs { Decimal::MAX } else { Decimal::MIN })
}

/// Add, clamping to `Decimal::MAX` / `Decimal::MIN` instead of overflowing
pub fn saturating_add(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_add(rhs)
        .unwrap_or(if lhs.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
}

/// Sum amounts with [`saturating_add`]
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, saturating_add)
}

/// Convert a float amount, mapping NaN and infinities to zero
pub fn from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Parse a user-typed amount leniently.
///
/// Takes the longest leading numeric prefix (`"12.5 EUR"` → `12.5`), accepts a
/// comma as decimal separator when no dot is present, and returns zero for
/// anything that does not start with a number or does not fit in a `Decimal`.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    let normalized = if !trimmed.contains('.') && trimmed.contains(',') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    match canonical_prefix(&normalized) {
        Some(canonical) => parse_canonical(&canonical),
        None => Decimal::ZERO,
    }
}

/// Largest exponent magnitude worth handing to `Decimal::from_scientific`
const MAX_EXPONENT: i64 = 56;

fn parse_canonical(canonical: &str) -> Decimal {
    let parsed = match canonical.split_once('e') {
        Some((_, exponent)) => match exponent.parse::<i64>() {
            Ok(exp) if exp.abs() <= MAX_EXPONENT => Decimal::from_scientific(canonical),
            _ => return Decimal::ZERO,
        },
        None => canonical.parse::<Decimal>(),
    };
    parsed.unwrap_or(Decimal::ZERO)
}

/// Extract `[sign]digits[.digits][e[sign]digits]` from the start of `input`
/// and rewrite it into a form `Decimal` accepts (`".5"` → `"0.5"`, `"3."` → `"3"`).
fn canonical_prefix(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut out = String::new();

    if let Some(&sign) = bytes.first() {
        if sign == b'-' || sign == b'+' {
            if sign == b'-' {
                out.push('-');
            }
            pos += 1;
        }
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &input[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &input[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    out.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        let mut exponent = String::from("e");
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'-' || bytes[exp_pos] == b'+') {
            exponent.push(bytes[exp_pos] as char);
            exp_pos += 1;
        }
        let exp_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            exponent.push_str(&input[exp_start..exp_pos]);
            out.push_str(&exponent);
        }
    }

    Some(out)
}
