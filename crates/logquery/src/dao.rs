//! Log query gateway.

use std::sync::Arc;

use logquery_core::log::{LogEntry, LogQuery};
use logquery_core::storage::{LogStore, Result};

/// Read-only access to log records of a single table.
///
/// Holds no state besides the injected store, so it is cheap to clone and
/// safe to share across tasks.
#[derive(Clone)]
pub struct LogDao {
    store: Arc<dyn LogStore>,
}

impl LogDao {
    /// Creates a gateway backed by the given store.
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Returns the records of `log_level` with a timestamp in `[start_time, end_time]`.
    ///
    /// Fails with `InvalidArgument` if any input is empty or if
    /// `start_time > end_time`.
    pub async fn get_logs_between_times(
        &self,
        log_level: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Vec<LogEntry>> {
        let query = LogQuery::between(log_level, start_time, end_time)?;
        self.run(&query).await
    }

    /// Returns the records of `log_level` with a timestamp strictly before `end_time`.
    pub async fn get_logs_before_time(
        &self,
        log_level: &str,
        end_time: &str,
    ) -> Result<Vec<LogEntry>> {
        let query = LogQuery::before(log_level, end_time)?;
        self.run(&query).await
    }

    /// Returns the records of `log_level` with a timestamp strictly after `start_time`.
    pub async fn get_logs_after_time(
        &self,
        log_level: &str,
        start_time: &str,
    ) -> Result<Vec<LogEntry>> {
        let query = LogQuery::after(log_level, start_time)?;
        self.run(&query).await
    }

    async fn run(&self, query: &LogQuery) -> Result<Vec<LogEntry>> {
        match self.store.query(query).await {
            Ok(entries) => {
                tracing::debug!(
                    log_level = query.partition_key(),
                    shape = query.condition().shape(),
                    count = entries.len(),
                    "Log query completed"
                );
                Ok(entries)
            }
            Err(err) => {
                tracing::warn!(
                    log_level = query.partition_key(),
                    shape = query.condition().shape(),
                    error = %err,
                    "Log query failed"
                );
                Err(err)
            }
        }
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use logquery_core::storage::QueryError;

    use super::*;
    use crate::storage::InMemoryLogStore;

    /// Store that always fails, counting how often it was asked.
    #[derive(Default)]
    struct FailingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LogStore for FailingStore {
        async fn query(&self, _query: &LogQuery) -> Result<Vec<LogEntry>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(QueryError::StorageUnavailable(
                "Throughput exceeded, please retry".to_string(),
            ))
        }
    }

    fn timestamps(entries: &[LogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.time_stamp.as_str()).collect()
    }

    fn scenario_dao() -> LogDao {
        let store = InMemoryLogStore::with_entries([
            LogEntry::new("ERROR", "2020-01-01"),
            LogEntry::new("ERROR", "2020-01-02"),
            LogEntry::new("ERROR", "2020-01-03"),
            LogEntry::new("INFO", "2020-01-02"),
        ]);
        LogDao::new(Arc::new(store))
    }

    // ==================== Query Semantics Tests ====================

    #[tokio::test]
    async fn test_get_logs_between_times() {
        let dao = scenario_dao();

        let entries = dao
            .get_logs_between_times("ERROR", "2020-01-01", "2020-01-02")
            .await
            .unwrap();

        assert_eq!(timestamps(&entries), vec!["2020-01-01", "2020-01-02"]);
    }

    #[tokio::test]
    async fn test_get_logs_before_time() {
        let dao = scenario_dao();

        let entries = dao.get_logs_before_time("ERROR", "2020-01-02").await.unwrap();

        assert_eq!(timestamps(&entries), vec!["2020-01-01"]);
    }

    #[tokio::test]
    async fn test_get_logs_after_time() {
        let dao = scenario_dao();

        let entries = dao.get_logs_after_time("ERROR", "2020-01-02").await.unwrap();

        assert_eq!(timestamps(&entries), vec!["2020-01-03"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let dao = scenario_dao();

        let entries = dao
            .get_logs_between_times("ERROR", "2021-01-01", "2021-12-31")
            .await
            .unwrap();
        assert!(entries.is_empty());

        let entries = dao.get_logs_before_time("FATAL", "2030-01-01").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_before_boundary_after_partition_the_level() {
        let dao = scenario_dao();
        let all: BTreeSet<String> = ["2020-01-01", "2020-01-02", "2020-01-03"]
            .into_iter()
            .map(String::from)
            .collect();

        for boundary in ["2019-12-31", "2020-01-01", "2020-01-02", "2020-01-03", "2020-02-01"] {
            let before = dao.get_logs_before_time("ERROR", boundary).await.unwrap();
            let after = dao.get_logs_after_time("ERROR", boundary).await.unwrap();

            let before: BTreeSet<String> = before.into_iter().map(|e| e.time_stamp).collect();
            let after: BTreeSet<String> = after.into_iter().map(|e| e.time_stamp).collect();

            assert!(before.is_disjoint(&after));
            assert!(!before.contains(boundary));
            assert!(!after.contains(boundary));

            let mut union: BTreeSet<String> = before.union(&after).cloned().collect();
            if all.contains(boundary) {
                union.insert(boundary.to_string());
            }
            assert_eq!(union, all, "boundary {boundary}");
        }
    }

    #[tokio::test]
    async fn test_queries_run_concurrently() {
        let dao = scenario_dao();

        let (between, before, after) = tokio::join!(
            dao.get_logs_between_times("ERROR", "2020-01-01", "2020-01-03"),
            dao.get_logs_before_time("ERROR", "2020-01-02"),
            dao.get_logs_after_time("ERROR", "2020-01-02"),
        );

        assert_eq!(between.unwrap().len(), 3);
        assert_eq!(before.unwrap().len(), 1);
        assert_eq!(after.unwrap().len(), 1);
    }

    // ==================== Validation Tests ====================

    #[tokio::test]
    async fn test_reversed_bounds_are_rejected_before_dispatch() {
        let store = Arc::new(FailingStore::default());
        let dao = LogDao::new(store.clone());

        let result = dao
            .get_logs_between_times("ERROR", "2020-01-03", "2020-01-01")
            .await;

        assert!(matches!(result, Err(QueryError::InvalidArgument(_))));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_inputs_are_rejected_before_dispatch() {
        let store = Arc::new(FailingStore::default());
        let dao = LogDao::new(store.clone());

        let results = [
            dao.get_logs_between_times("", "2020-01-01", "2020-01-02").await,
            dao.get_logs_between_times("ERROR", "", "2020-01-02").await,
            dao.get_logs_before_time("", "2020-01-02").await,
            dao.get_logs_before_time("ERROR", "").await,
            dao.get_logs_after_time("", "2020-01-02").await,
            dao.get_logs_after_time("ERROR", "").await,
        ];

        for result in results {
            assert!(matches!(result, Err(QueryError::InvalidArgument(_))));
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Storage Failure Tests ====================

    #[tokio::test]
    async fn test_storage_failure_propagates_without_retry() {
        let store = Arc::new(FailingStore::default());
        let dao = LogDao::new(store.clone());

        let result = dao.get_logs_after_time("ERROR", "2020-01-01").await;

        assert_eq!(
            result,
            Err(QueryError::StorageUnavailable(
                "Throughput exceeded, please retry".to_string()
            ))
        );
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }
}
