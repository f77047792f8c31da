//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `QueryError` from `logquery_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError as DynamoQueryError;
use logquery_core::storage::QueryError;

/// Map a Query SDK error to QueryError.
///
/// Every SDK failure is a storage failure; the SDK has already applied its
/// own retry policy by the time the error reaches us. The service message is
/// kept so callers can tell which table or limit was involved.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DynamoQueryError, R>,
) -> QueryError {
    match err.into_service_error() {
        DynamoQueryError::ResourceNotFoundException(e) => {
            with_message("Table not found", e.message())
        }
        DynamoQueryError::ProvisionedThroughputExceededException(e) => {
            with_message("Throughput exceeded, please retry", e.message())
        }
        DynamoQueryError::RequestLimitExceeded(e) => {
            with_message("Request limit exceeded, please retry", e.message())
        }
        DynamoQueryError::InternalServerError(e) => {
            with_message("DynamoDB internal server error", e.message())
        }
        err => QueryError::StorageUnavailable(format!("Query failed: {:?}", err)),
    }
}

fn with_message(summary: &str, message: Option<&str>) -> QueryError {
    match message {
        Some(message) if !message.is_empty() => {
            QueryError::StorageUnavailable(format!("{}: {}", summary, message))
        }
        _ => QueryError::StorageUnavailable(summary.to_string()),
    }
}
