//! Core error types for the fund ledger.
//!
//! This module defines storage-agnostic error types. Errors raised by a
//! concrete ledger backend (SQLite, in-memory, ...) are converted to
//! [`StorageFailure`] by that backend.

use thiserror::Error;

use crate::ledger::DocType;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for ledger operations.
///
/// Every variant identifies the precondition that was violated. None of them
/// are retried by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("An object already exists with id '{0}'")]
    AlreadyExists(String),

    #[error("No {kind} exists with id '{id}'")]
    NotFound { kind: DocType, id: String },

    #[error("The {kind} name '{name}' is already taken{}", scope_suffix(.scope))]
    DuplicateName {
        kind: DocType,
        name: String,
        scope: Option<String>,
    },

    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ledger storage failure: {0}")]
    Storage(#[from] StorageFailure),
}

fn scope_suffix(scope: &Option<String>) -> String {
    match scope {
        Some(fund_id) => format!(" for fund '{}'", fund_id),
        None => String::new(),
    }
}

impl Error {
    pub fn not_found(kind: DocType, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns true for the `InvalidArgument` class of failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

/// Argument validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("the specified type '{value}' is invalid for a {kind}")]
    InvalidActionType { kind: DocType, value: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("failed to parse decimal '{value}' for field '{field}': {source}")]
    DecimalParse {
        field: String,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("function '{function}' expects {expected} arguments, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}

/// Opaque failures of the ledger collaborator.
///
/// Details are carried as strings so backends can convert their own error
/// types without leaking them into the core.
#[derive(Error, Debug)]
pub enum StorageFailure {
    #[error("error retrieving the world state: {0}")]
    ReadFailed(String),

    #[error("error writing the world state: {0}")]
    WriteFailed(String),

    #[error("query execution failed: {0}")]
    QueryFailed(String),

    #[error("document encoding failed: {0}")]
    Encoding(String),

    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageFailure::Encoding(err.to_string()))
    }
}
