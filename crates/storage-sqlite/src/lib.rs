//! SQLite storage implementation for the fund ledger.
//!
//! This crate provides the durable world state using Diesel ORM with SQLite.
//! It implements the ledger traits defined in `fundledger-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor that gives each ledger unit its own transaction
//! - The document table model (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! The core crate is storage-agnostic and works with traits.
//!
//! ```text
//!        core (domain + contract)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod documents;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, init_db_file, resolve_db_path, run_migrations,
    spawn_writer, DbConnection, DbPool, WriteHandle,
};

pub use documents::{SqliteLedger, SqliteLedgerState};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from fundledger-core for convenience
pub use fundledger_core::errors::{Error, Result, StorageFailure};
