//! Time-range queries over a log table partitioned by level and sorted by timestamp.
//!
//! [`LogDao`] is the entry point. It validates the request, builds a
//! [`LogQuery`](logquery_core::log::LogQuery) and hands it to an injected
//! [`LogStore`](logquery_core::storage::LogStore).

pub mod config;
pub mod dao;
pub mod output;
pub mod storage;

pub use config::Config;
pub use dao::LogDao;
