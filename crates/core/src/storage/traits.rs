use async_trait::async_trait;

use crate::log::{LogEntry, LogQuery};

use super::Result;

/// Read access to a table of log records partitioned by level and sorted by timestamp.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Returns every record matching the query, ascending by timestamp.
    ///
    /// An empty result is not an error. Pagination, if any, is resolved by the
    /// implementation; callers always get the complete result set or an error.
    async fn query(&self, query: &LogQuery) -> Result<Vec<LogEntry>>;
}
