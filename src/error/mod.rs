//! Error types for the build book.
//!
//! Each domain (configuration, catalog, build validation, storage) has its own error enum
//! defined with `thiserror`. They are aggregated into [`Error`] so the `?` operator can be
//! used across layers while still letting callers tell validation problems apart from an
//! unavailable backend.

/// Build validation errors.
pub mod build;
/// Catalog loading errors.
pub mod catalog;
/// Configuration errors.
pub mod config;
/// Storage availability errors.
pub mod storage;

use dioxus_logger::tracing;
use sea_orm::{sqlx, DbErr, RuntimeErr};
use thiserror::Error;

use crate::error::{
    build::BuildError, catalog::CatalogError, config::ConfigError, storage::StorageError,
};

/// Main error type for the build book.
///
/// Database errors are classified on conversion: connection and pool acquisition failures,
/// including connections lost while a statement runs, become [`Error::StorageUnavailable`].
/// Everything else stays a [`Error::DbErr`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Item catalog could not be loaded or violates its invariants.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Caller violated a precondition of a build operation.
    #[error(transparent)]
    Validation(#[from] BuildError),
    /// Storage backend unreachable or timed out.
    #[error(transparent)]
    StorageUnavailable(#[from] StorageError),
    /// Database error that is not a connectivity problem (query failure, missing schema).
    #[error(transparent)]
    DbErr(DbErr),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        let unreachable = match &err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
            DbErr::Query(RuntimeErr::SqlxError(inner))
            | DbErr::Exec(RuntimeErr::SqlxError(inner)) => is_connectivity_error(inner),
            _ => false,
        };

        if unreachable {
            Self::StorageUnavailable(StorageError::Unreachable(err))
        } else {
            Self::DbErr(err)
        }
    }
}

/// Whether a driver error means the backend could not be reached, as opposed to a failing
/// statement.
fn is_connectivity_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

impl Error {
    /// Message shown to the user who issued the command that failed.
    ///
    /// Validation errors are echoed back since they describe the user's own input. Storage
    /// and internal errors are logged and replaced with a generic message so backend details
    /// are not leaked into chat.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => {
                tracing::debug!("Rejected build request: {}", err);

                err.to_string()
            }
            Self::StorageUnavailable(err) => {
                tracing::error!("Storage unavailable: {}", err);

                "The build storage is unavailable right now, please try again later.".to_string()
            }
            err => {
                tracing::error!("Internal error: {}", err);

                "Something went wrong while handling that command.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, ErrorKind},
        sync::Arc,
    };

    use sea_orm::ConnAcquireErr;

    use super::*;

    fn query_err(err: sqlx::Error) -> DbErr {
        DbErr::Query(RuntimeErr::SqlxError(Arc::new(err)))
    }

    /// Expect pool acquisition failures to be reported as unavailable storage
    #[test]
    fn classifies_acquire_timeout_as_unavailable() {
        let err = Error::from(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));

        assert!(matches!(
            err,
            Error::StorageUnavailable(StorageError::Unreachable(_))
        ));
    }

    /// Expect connection failures to be reported as unavailable storage
    #[test]
    fn classifies_connection_error_as_unavailable() {
        let err = Error::from(DbErr::Conn(RuntimeErr::Internal("refused".to_string())));

        assert!(matches!(err, Error::StorageUnavailable(_)));
    }

    /// Expect a connection reset during a query to be reported as unavailable storage
    #[test]
    fn classifies_reset_during_query_as_unavailable() {
        let err = Error::from(query_err(sqlx::Error::Io(io::Error::from(
            ErrorKind::ConnectionReset,
        ))));

        assert!(matches!(
            err,
            Error::StorageUnavailable(StorageError::Unreachable(_))
        ));
    }

    /// Expect a TLS failure during an exec to be reported as unavailable storage
    #[test]
    fn classifies_tls_failure_during_exec_as_unavailable() {
        let err = Error::from(DbErr::Exec(RuntimeErr::SqlxError(Arc::new(
            sqlx::Error::Tls(Box::new(io::Error::other("handshake failed"))),
        ))));

        assert!(matches!(err, Error::StorageUnavailable(_)));
    }

    /// Expect pool failures surfacing from a statement to be reported as unavailable storage
    #[test]
    fn classifies_pool_failures_during_query_as_unavailable() {
        for driver_err in [
            sqlx::Error::PoolTimedOut,
            sqlx::Error::PoolClosed,
            sqlx::Error::WorkerCrashed,
        ] {
            let err = Error::from(query_err(driver_err));

            assert!(matches!(err, Error::StorageUnavailable(_)));
        }
    }

    /// Expect statement failures reported by the driver to stay database errors
    #[test]
    fn keeps_driver_row_errors_as_db_errors() {
        let err = Error::from(query_err(sqlx::Error::RowNotFound));

        assert!(matches!(err, Error::DbErr(_)));
    }

    /// Expect query errors to stay database errors
    #[test]
    fn keeps_query_errors_as_db_errors() {
        let err = Error::from(DbErr::Custom("no such table: champion_build".to_string()));

        assert!(matches!(err, Error::DbErr(_)));
    }

    /// Expect validation errors to be echoed back to the user
    #[test]
    fn echoes_validation_errors() {
        let err = Error::from(BuildError::EmptyItemIds);

        assert_eq!(err.user_message(), BuildError::EmptyItemIds.to_string());
    }
}
