use std::ops::Bound;

use crate::storage::{QueryError, Result};

use super::LogEntry;

/// The sort-key predicate of a range query.
///
/// Bounds compare as the store compares sort keys: lexicographically on the
/// stored string. Timestamps must be pre-formatted (e.g. ISO-8601) to sort
/// correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCondition {
    /// `start <= sort_key <= end`
    Between { start: String, end: String },
    /// `sort_key < end`
    Before { end: String },
    /// `sort_key > start`
    After { start: String },
}

impl KeyCondition {
    /// Short name of the query shape, used in log events.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Between { .. } => "between",
            Self::Before { .. } => "before",
            Self::After { .. } => "after",
        }
    }

    pub fn lower_bound(&self) -> Option<&str> {
        match self {
            Self::Between { start, .. } | Self::After { start } => Some(start.as_str()),
            Self::Before { .. } => None,
        }
    }

    pub fn upper_bound(&self) -> Option<&str> {
        match self {
            Self::Between { end, .. } | Self::Before { end } => Some(end.as_str()),
            Self::After { .. } => None,
        }
    }

    /// Whether the lower bound itself matches. `false` when there is no lower bound.
    pub fn lower_inclusive(&self) -> bool {
        matches!(self, Self::Between { .. })
    }

    /// Whether the upper bound itself matches. `false` when there is no upper bound.
    pub fn upper_inclusive(&self) -> bool {
        matches!(self, Self::Between { .. })
    }

    /// Returns the condition as a pair of range bounds over sort keys.
    pub fn bounds(&self) -> (Bound<&str>, Bound<&str>) {
        match self {
            Self::Between { start, end } => {
                (Bound::Included(start.as_str()), Bound::Included(end.as_str()))
            }
            Self::Before { end } => (Bound::Unbounded, Bound::Excluded(end.as_str())),
            Self::After { start } => (Bound::Excluded(start.as_str()), Bound::Unbounded),
        }
    }

    /// Returns true if the sort key satisfies the condition.
    pub fn matches(&self, sort_key: &str) -> bool {
        match self {
            Self::Between { start, end } => start.as_str() <= sort_key && sort_key <= end.as_str(),
            Self::Before { end } => sort_key < end.as_str(),
            Self::After { start } => sort_key > start.as_str(),
        }
    }
}

/// A validated range query over one log level partition.
///
/// Constructed per call and discarded afterwards. Construction is the only
/// place inputs are validated, so a `LogQuery` handed to a store is always
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    log_level: String,
    condition: KeyCondition,
}

impl LogQuery {
    /// Records of `log_level` with `start_time <= time_stamp <= end_time`.
    ///
    /// Fails with `InvalidArgument` on empty inputs or when `start_time > end_time`.
    pub fn between(
        log_level: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<Self> {
        let log_level = non_empty("log level", log_level.into())?;
        let start = non_empty("start time", start_time.into())?;
        let end = non_empty("end time", end_time.into())?;

        if start > end {
            return Err(QueryError::InvalidArgument(format!(
                "start time {start} is after end time {end}"
            )));
        }

        Ok(Self {
            log_level,
            condition: KeyCondition::Between { start, end },
        })
    }

    /// Records of `log_level` with `time_stamp < end_time`.
    pub fn before(log_level: impl Into<String>, end_time: impl Into<String>) -> Result<Self> {
        Ok(Self {
            log_level: non_empty("log level", log_level.into())?,
            condition: KeyCondition::Before {
                end: non_empty("end time", end_time.into())?,
            },
        })
    }

    /// Records of `log_level` with `time_stamp > start_time`.
    pub fn after(log_level: impl Into<String>, start_time: impl Into<String>) -> Result<Self> {
        Ok(Self {
            log_level: non_empty("log level", log_level.into())?,
            condition: KeyCondition::After {
                start: non_empty("start time", start_time.into())?,
            },
        })
    }

    /// The partition key value (the log level).
    pub fn partition_key(&self) -> &str {
        &self.log_level
    }

    pub fn condition(&self) -> &KeyCondition {
        &self.condition
    }

    pub fn lower_bound(&self) -> Option<&str> {
        self.condition.lower_bound()
    }

    pub fn upper_bound(&self) -> Option<&str> {
        self.condition.upper_bound()
    }

    pub fn lower_inclusive(&self) -> bool {
        self.condition.lower_inclusive()
    }

    pub fn upper_inclusive(&self) -> bool {
        self.condition.upper_inclusive()
    }

    /// Returns true if the record belongs to the result set of this query.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        entry.log_level == self.log_level && self.condition.matches(&entry.time_stamp)
    }
}

fn non_empty(field: &str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(QueryError::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(value)
}
