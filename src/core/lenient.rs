//! Tolerant field decoders for the prediction API.
//!
//! The backend is loosely typed: numbers sometimes arrive as strings, keys
//! sometimes arrive as numbers, and any field may be `null`. A field that
//! can't be read is treated as absent instead of failing the whole document.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            tracing::warn!("Ignoring non-text value for text field: {}", other);
            None
        }
    }))
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Some(f),
            _ => {
                tracing::warn!("Failed to parse number: '{}'", s);
                None
            }
        },
        other => {
            tracing::warn!("Ignoring non-numeric value: {}", other);
            None
        }
    }))
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Null => None,
        Value::Number(n) => match n.as_i64().or_else(|| n.as_f64().and_then(integral)) {
            Some(i) => Some(i),
            None => {
                tracing::warn!("Ignoring non-integer or out-of-range number: {}", n);
                None
            }
        },
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(i) => Some(i),
                Err(_) => match trimmed.parse::<f64>().ok().and_then(integral) {
                    Some(i) => Some(i),
                    None => {
                        tracing::warn!("Failed to parse integer: '{}'", s);
                        None
                    }
                },
            }
        }
        other => {
            tracing::warn!("Ignoring non-integer value: {}", other);
            None
        }
    }))
}

pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Null => None,
        // serde_json prints the shortest repr, so 1.85 stays 1.85 rather than 1.8500000000000000888
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(&s),
        other => {
            tracing::warn!("Ignoring non-numeric price: {}", other);
            None
        }
    }))
}

/// Decodes a list element by element; entries that aren't objects of the
/// expected shape are dropped with a warning. `null` for the list itself is absent.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(i, item)| match item {
                    Value::Object(_) => serde_json::from_value(item)
                        .map_err(|e| tracing::warn!("Dropping list entry {}: {}", i, e))
                        .ok(),
                    other => {
                        tracing::warn!("Dropping non-object list entry {}: {}", i, other);
                        None
                    }
                })
                .collect(),
        ),
        other => {
            tracing::warn!("Ignoring non-list value: {}", other);
            None
        }
    }))
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| tracing::warn!("Failed to parse price: '{}' - Error: {}", raw, e))
        .ok()
}

// i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64)
        .then_some(f as i64)
}
