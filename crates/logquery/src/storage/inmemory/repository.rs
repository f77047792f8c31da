//! In-memory log store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use logquery_core::log::{LogEntry, LogQuery};
use logquery_core::storage::{LogStore, Result};

/// Records of one log level, keyed by timestamp.
type Partition = BTreeMap<String, LogEntry>;

/// In-memory storage backend for testing.
///
/// Uses nested `BTreeMap`s wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Clones share the same data.
#[derive(Debug, Clone)]
pub struct InMemoryLogStore {
    partitions: Arc<RwLock<BTreeMap<String, Partition>>>,
}

impl Default for InMemoryLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            partitions: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Creates a store seeded with the given records.
    ///
    /// A later record with the same `(log_level, time_stamp)` replaces an earlier one.
    pub fn with_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut partitions: BTreeMap<String, Partition> = BTreeMap::new();
        for entry in entries {
            partitions
                .entry(entry.log_level.clone())
                .or_default()
                .insert(entry.time_stamp.clone(), entry);
        }
        Self {
            partitions: Arc::new(RwLock::new(partitions)),
        }
    }

    /// Inserts a record, replacing any record with the same key.
    pub async fn insert(&self, entry: LogEntry) {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(entry.log_level.clone())
            .or_default()
            .insert(entry.time_stamp.clone(), entry);
    }

    /// Total number of records across all levels.
    pub async fn len(&self) -> usize {
        let partitions = self.partitions.read().await;
        partitions.values().map(BTreeMap::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
    async fn query(&self, query: &LogQuery) -> Result<Vec<LogEntry>> {
        let partitions = self.partitions.read().await;
        let Some(partition) = partitions.get(query.partition_key()) else {
            return Ok(Vec::new());
        };

        // `LogQuery` guarantees start <= end, which `range` requires.
        Ok(partition
            .range::<str, _>(query.condition().bounds())
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}
