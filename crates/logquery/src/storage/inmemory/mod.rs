//! In-memory storage backend for testing.
//!
//! Records are kept in a `BTreeMap` per log level, keyed by timestamp, so
//! range queries come back in ascending sort-key order just like the real
//! table. Data is not persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use logquery::storage::inmemory::InMemoryLogStore;
//! use logquery_core::log::LogEntry;
//!
//! let store = InMemoryLogStore::with_entries([LogEntry::new("ERROR", "2020-01-01")]);
//! ```

mod repository;

pub use repository::InMemoryLogStore;
