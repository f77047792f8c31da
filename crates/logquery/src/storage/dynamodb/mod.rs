//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `LogStore`
//! using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod keys;
mod repository;

pub use client::create_client;
pub use repository::DynamoDbLogStore;
