//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting DynamoDB AttributeValue maps into log records.
//! These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use logquery_core::log::LogEntry;
use logquery_core::storage::QueryError;
use serde_json::{Map, Value};

use super::keys;

/// Convert a DynamoDB item to a LogEntry.
///
/// The key attributes are required strings. Every other attribute is carried
/// as JSON; binary attributes have no JSON form and are skipped.
pub fn item_to_log_entry(item: &HashMap<String, AttributeValue>) -> Result<LogEntry, QueryError> {
    let log_level = get_string(item, keys::LOG_LEVEL)?;
    let time_stamp = get_string(item, keys::TIME_STAMP)?;

    let attributes: BTreeMap<String, Value> = item
        .iter()
        .filter(|(name, _)| name.as_str() != keys::LOG_LEVEL && name.as_str() != keys::TIME_STAMP)
        .filter_map(|(name, value)| attribute_to_json(value).map(|json| (name.clone(), json)))
        .collect();

    Ok(LogEntry {
        log_level,
        time_stamp,
        attributes,
    })
}

/// Convert a single attribute value to JSON.
///
/// Returns `None` for binary values.
pub fn attribute_to_json(value: &AttributeValue) -> Option<Value> {
    match value {
        AttributeValue::S(s) => Some(Value::String(s.clone())),
        AttributeValue::N(n) => Some(number_to_json(n)),
        AttributeValue::Bool(b) => Some(Value::Bool(*b)),
        AttributeValue::Null(_) => Some(Value::Null),
        AttributeValue::Ss(values) => Some(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => Some(Value::Array(
            values.iter().map(|n| number_to_json(n)).collect(),
        )),
        AttributeValue::L(values) => Some(Value::Array(
            values.iter().filter_map(attribute_to_json).collect(),
        )),
        AttributeValue::M(map) => Some(Value::Object(
            map.iter()
                .filter_map(|(name, value)| attribute_to_json(value).map(|json| (name.clone(), json)))
                .collect::<Map<String, Value>>(),
        )),
        _ => None,
    }
}

/// DynamoDB numbers travel as strings with up to 38 significant digits.
///
/// The string is kept whenever the JSON number would not print back to the
/// exact same text, so no digits are lost.
fn number_to_json(n: &str) -> Value {
    match serde_json::from_str::<Value>(n) {
        Ok(value @ Value::Number(_)) if value.to_string() == n => value,
        _ => Value::String(n.to_string()),
    }
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, QueryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            QueryError::StorageUnavailable(format!("Missing or invalid field: {}", key))
        })
}
