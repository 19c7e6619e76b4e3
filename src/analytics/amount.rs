//! Coercion of loosely typed amount fields
//!
//! The demo backend's seed data mixes JSON numbers with decorated strings
//! like `"$1,234.56"`. Malformed financial data must degrade to zero rather
//! than abort a view, so every path through here ends in a finite number.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a numeric-or-string JSON value into a finite number.
///
/// Finite numbers pass through unchanged. Strings are stripped down to
/// digits, the decimal point, and a leading minus sign, then parsed. Every
/// other input, and every parse failure, yields `0.0`. Never panics, never
/// returns NaN or infinity.
pub fn normalize(raw: &Value) -> f64 {
    match raw {
        Value::Number(number) => {
            let value = number.as_f64().unwrap_or(0.0);
            finite_or_zero(value)
        }
        Value::String(text) => parse_decimal(text),
        _ => 0.0,
    }
}

/// Serde adapter so wire amounts deserialize through [`normalize`]
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(normalize(&raw))
}

fn parse_decimal(text: &str) -> f64 {
    let mut cleaned = String::new();
    for ch in text.trim().chars() {
        if ch.is_ascii_digit() || ch == '.' {
            cleaned.push(ch);
        } else if ch == '-' && cleaned.is_empty() {
            // minus is only meaningful in the leading position
            cleaned.push(ch);
        }
    }

    match cleaned.parse::<f64>() {
        Ok(value) => finite_or_zero(value),
        Err(_) => 0.0,
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
