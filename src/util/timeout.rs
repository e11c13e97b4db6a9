//! Time bounds for storage operations.

use std::{future::Future, time::Duration};

use dioxus_logger::tracing;
use sea_orm::DbErr;

use crate::error::{storage::StorageError, Error};

/// Runs a storage operation, failing with [`StorageError::Timeout`] once `timeout` elapses.
///
/// The operation is dropped on timeout, which releases any pooled connection it held. No
/// retry is attempted.
///
/// # Arguments
/// - `operation` - Description used in logs and in the timeout error
/// - `timeout` - Upper bound for the operation
/// - `future` - The storage operation
///
/// # Returns
/// - `Ok(T)` - Operation completed in time
/// - `Err(Error::StorageUnavailable)` - Operation timed out or the backend was unreachable
/// - `Err(Error::DbErr)` - Operation failed for another database reason
pub async fn with_storage_timeout<T, F>(
    operation: &str,
    timeout: Duration,
    future: F,
) -> Result<T, Error>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result.map_err(Error::from),
        Err(_) => {
            tracing::warn!(
                "Storage operation '{}' timed out after {}ms",
                operation,
                timeout.as_millis()
            );

            Err(StorageError::Timeout {
                operation: operation.to_string(),
                after: timeout,
            }
            .into())
        }
    }
}
