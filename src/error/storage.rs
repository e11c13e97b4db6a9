use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;

/// Storage backend could not serve the request.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Operation did not complete within the configured storage timeout.
    #[error("Storage operation '{operation}' timed out after {}ms", .after.as_millis())]
    Timeout {
        /// Description of the operation that timed out.
        operation: String,
        /// Timeout that was exceeded.
        after: Duration,
    },
    /// Connection to the backend failed or no pooled connection could be acquired.
    #[error("Storage backend unreachable: {0}")]
    Unreachable(DbErr),
}
