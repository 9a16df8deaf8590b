//! Dotted-key queries over a decoded configuration table.
//!
//! Responsibilities:
//! - Look up a value by dotted path (`project.name`, `servers.0.host`).
//! - Enumerate every leaf key in dotted form.
//! - Render values for terminal or JSON output.
//!
//! Invariants:
//! - Numeric segments index into arrays; all other segments index tables.
//! - Leaf keys are returned in sorted order.

use anyhow::Context;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use toml::{Table, Value};

/// Find the value at `key`, or None if any segment is missing.
pub fn lookup<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let mut current = table.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Value::Table(inner) => inner.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Every leaf key in dotted form. Empty tables count as leaves.
pub fn leaf_keys(table: &Table) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(table, "", &mut keys);
    keys.sort();
    keys
}

fn collect_keys(table: &Table, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Table(inner) if !inner.is_empty() => collect_keys(inner, &full_key, keys),
            _ => keys.push(full_key),
        }
    }
}

/// Render a value for display.
///
/// Strings print bare, other scalars and arrays in TOML form, tables as a TOML
/// document. With `json`, everything prints as pretty JSON.
pub fn render(value: &Value, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(&to_json(value))
            .context("Failed to render value as JSON");
    }

    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Table(table) => toml::to_string(table)
            .context("Failed to render table as TOML")?
            .trim_end()
            .to_string(),
        other => other.to_string(),
    })
}

/// Convert a TOML value to JSON. Datetimes and non-finite floats become strings.
fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Integer(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(f.to_string())),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        Value::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Table(table) => JsonValue::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect::<JsonMap<String, JsonValue>>(),
        ),
    }
}
