//! Number parsing and rounding with browser semantics.
//!
//! Counter targets come from markup attributes and are displayed next to
//! text produced by browsers, so parsing follows `parseFloat` and rounding
//! follows `Math.round` / `Number.prototype.toFixed`.

use rust_decimal::prelude::{Decimal, RoundingStrategy};

/// Parses the longest numeric prefix of `raw`, like `parseFloat`.
///
/// Leading whitespace is skipped; trailing garbage is ignored (`"12px"` is 12).
/// Returns `None` when no numeric prefix exists.
#[must_use]
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if mantissa_digits > 0 || frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    // Rust's parser rejects a bare trailing dot ("5."), browsers accept it.
    text[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// Rounds to the nearest integer with ties toward positive infinity, like `Math.round`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    // `Math.round(-0.4)` is -0, which prints as "0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Fixed-point rendering with ties rounded away from zero on the exact binary value,
/// like `toFixed`.
#[must_use]
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let precision = digits as usize;
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}
