//! DynamoDB log store implementation.
//!
//! Implements `LogStore` from `logquery_core::storage` using the Query API.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use logquery_core::log::{LogEntry, LogQuery};
use logquery_core::storage::{LogStore, Result};

use super::client::create_client;
use super::conversions::item_to_log_entry;
use super::error::map_query_error;
use super::keys;
use crate::config::Config;

/// DynamoDB-based log store.
///
/// Bound to a single table whose partition key is `log_level` and whose sort
/// key is `time_stamp`.
#[derive(Debug, Clone)]
pub struct DynamoDbLogStore {
    client: Client,
    table_name: String,
}

impl DynamoDbLogStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }
}

#[async_trait]
impl LogStore for DynamoDbLogStore {
    async fn query(&self, query: &LogQuery) -> Result<Vec<LogEntry>> {
        let expression = keys::key_condition_expression(query.condition());

        tracing::trace!(table = %self.table_name, expression, "Querying DynamoDB");

        // The paginator follows LastEvaluatedKey; a failure on any page fails the query.
        let items = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(expression)
            .set_expression_attribute_values(Some(keys::expression_attribute_values(query)))
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(map_query_error)?;

        items.iter().map(item_to_log_entry).collect()
    }
}
