//! Storage backend implementations.
//!
//! Concrete implementations of `logquery_core::storage::LogStore`, selected
//! via feature flags. Unlike a single global backend, both can be compiled in
//! at once: the store is injected into [`LogDao`](crate::LogDao) at runtime.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): ordered in-memory store for tests and development
//! - `dynamodb`: AWS DynamoDB store using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p logquery --features dynamodb
//! ```

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryLogStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbLogStore;
