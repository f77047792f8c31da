use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log record, keyed by `(log_level, time_stamp)`.
///
/// Every attribute other than the two key attributes is opaque to this crate
/// and carried as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub log_level: String,
    pub time_stamp: String,
    #[serde(default, flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl LogEntry {
    /// Creates a record with no extra attributes.
    pub fn new(log_level: impl Into<String>, time_stamp: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
            time_stamp: time_stamp.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute, replacing any previous value under the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the attribute with the given name, if any.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}
