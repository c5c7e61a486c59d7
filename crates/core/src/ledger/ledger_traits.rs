//! Ledger collaborator traits.
//!
//! These traits are the whole contract the domain layer has with the
//! replicated ledger: point reads, upserts, selector queries and an
//! all-or-nothing unit of work. Concrete backends live outside this crate
//! (or in [`super::InMemoryLedger`] for tests).

use async_trait::async_trait;

use super::ledger_model::{QueryResult, Selector};
use crate::errors::Result;

/// Lazily produced query results. Dropping the iterator releases the cursor.
pub type QueryResultIterator<'a> = Box<dyn Iterator<Item = Result<QueryResult>> + 'a>;

/// Read access to the world state.
pub trait StateReader {
    /// Reads the value stored at `key`. An absent key is `Ok(None)`.
    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Runs a selector query against the document index.
    ///
    /// Results come back in an unspecified but stable order.
    fn get_query_result(&mut self, selector: &Selector) -> Result<QueryResultIterator<'_>>;
}

/// Read/write access to the world state inside one unit of work.
pub trait LedgerState: StateReader {
    /// Upserts `value` at `key`. Visible to others only once the unit commits.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<()>;
}

/// Supplies the atomic unit boundary for ledger operations.
///
/// `execute` commits every write made by the job if and only if the job
/// returns `Ok`; concurrent units are serialized by the implementation.
#[async_trait]
pub trait LedgerTransactionExecutor: Send + Sync {
    /// Runs `job` inside one transactional unit.
    async fn execute<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LedgerState) -> Result<T> + Send + 'static,
        T: Send + 'static;

    /// Runs a read-only `job` against committed state.
    fn read<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut dyn StateReader) -> Result<T>;
}
