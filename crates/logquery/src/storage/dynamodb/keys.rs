//! DynamoDB key attributes and key-condition expressions.
//!
//! Pure functions mapping a `LogQuery` onto the Query API parameters.
//! All functions are sync and have no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use logquery_core::log::{KeyCondition, LogQuery};

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key attribute.
pub const LOG_LEVEL: &str = "log_level";
/// Sort key attribute.
pub const TIME_STAMP: &str = "time_stamp";

// ============================================================================
// Placeholders
// ============================================================================

pub const LOG_LEVEL_VALUE: &str = ":logLevel";
pub const START_TIME_VALUE: &str = ":startTime";
pub const END_TIME_VALUE: &str = ":endTime";

/// Key-condition expression for the given query shape.
pub fn key_condition_expression(condition: &KeyCondition) -> &'static str {
    match condition {
        KeyCondition::Between { .. } => {
            "log_level = :logLevel AND time_stamp BETWEEN :startTime AND :endTime"
        }
        KeyCondition::Before { .. } => "log_level = :logLevel AND time_stamp < :endTime",
        KeyCondition::After { .. } => "log_level = :logLevel AND time_stamp > :startTime",
    }
}

/// Values bound to the placeholders of [`key_condition_expression`].
pub fn expression_attribute_values(query: &LogQuery) -> HashMap<String, AttributeValue> {
    let mut values = HashMap::new();
    values.insert(
        LOG_LEVEL_VALUE.to_string(),
        AttributeValue::S(query.partition_key().to_string()),
    );
    if let Some(start) = query.lower_bound() {
        values.insert(
            START_TIME_VALUE.to_string(),
            AttributeValue::S(start.to_string()),
        );
    }
    if let Some(end) = query.upper_bound() {
        values.insert(END_TIME_VALUE.to_string(), AttributeValue::S(end.to_string()));
    }
    values
}
