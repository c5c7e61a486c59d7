//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the storage-agnostic [`StorageFailure`] defined in `fundledger_core`.

use diesel::result::Error as DieselError;
use fundledger_core::errors::{Error, StorageFailure};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `fundledger_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Writer unavailable: {0}")]
    WriterUnavailable(String),

    /// A domain error raised by a job running inside a write transaction.
    /// Carried through unchanged so callers see the original failure.
    #[error(transparent)]
    Core(#[from] Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => StorageFailure::Unavailable(e.to_string()).into(),
            StorageError::PoolError(e) => StorageFailure::Unavailable(e.to_string()).into(),
            StorageError::QueryFailed(DieselError::RollbackTransaction) => {
                StorageFailure::TransactionFailed("transaction rolled back".to_string()).into()
            }
            StorageError::QueryFailed(e) => StorageFailure::QueryFailed(e.to_string()).into(),
            StorageError::MigrationFailed(e) => {
                StorageFailure::Unavailable(format!("migration failed: {}", e)).into()
            }
            StorageError::Io(e) => StorageFailure::Unavailable(e.to_string()).into(),
            StorageError::WriterUnavailable(e) => StorageFailure::Unavailable(e).into(),
            StorageError::Core(e) => e,
        }
    }
}

/// Extension trait for easily converting Diesel Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, diesel::result::Error>`
/// which handles the conversion through StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> fundledger_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> fundledger_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> fundledger_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
