use async_trait::async_trait;
use diesel::connection::DefaultLoadingMode;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

use super::model::LedgerDocumentDB;
use crate::db::{
    create_pool, get_connection, init, init_db_file, run_migrations, spawn_writer, DbPool,
    WriteHandle,
};
use crate::schema::ledger_documents;
use fundledger_core::errors::{Result, StorageFailure};
use fundledger_core::ledger::{
    LedgerState, LedgerTransactionExecutor, QueryResult, QueryResultIterator, Selector,
    StateReader,
};

/// World-state view over one SQLite connection.
///
/// Inside a write unit the connection is the writer actor's, so reads see
/// the unit's own uncommitted writes.
pub struct SqliteLedgerState<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> SqliteLedgerState<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl StateReader for SqliteLedgerState<'_> {
    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        ledger_documents::table
            .find(key)
            .select(ledger_documents::value)
            .first::<Vec<u8>>(&mut *self.conn)
            .optional()
            .map_err(|e| StorageFailure::ReadFailed(e.to_string()).into())
    }

    fn get_query_result(&mut self, selector: &Selector) -> Result<QueryResultIterator<'_>> {
        debug!("Executing ledger query {}", selector.to_query_string());
        // Rows are stepped from the open statement; dropping the iterator
        // finalizes it.
        let rows = ledger_documents::table
            .filter(ledger_documents::doc_type.eq(selector.doc_type().as_str()))
            .order(ledger_documents::key.asc())
            .select((ledger_documents::key, ledger_documents::value))
            .load_iter::<(String, Vec<u8>), DefaultLoadingMode>(&mut *self.conn)
            .map_err(|e| StorageFailure::QueryFailed(e.to_string()))?;

        let selector = selector.clone();
        let matches = rows.filter_map(move |row| match row {
            Ok((key, value)) => {
                let document: Value = serde_json::from_slice(&value).ok()?;
                selector
                    .matches(&document)
                    .then(|| Result::Ok(QueryResult { key, value }))
            }
            Err(e) => Some(Err(StorageFailure::QueryFailed(e.to_string()).into())),
        });
        Ok(Box::new(matches))
    }
}

impl LedgerState for SqliteLedgerState<'_> {
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let row = LedgerDocumentDB::new(key, value);
        diesel::insert_into(ledger_documents::table)
            .values(&row)
            .on_conflict(ledger_documents::key)
            .do_update()
            .set((
                ledger_documents::doc_type.eq(&row.doc_type),
                ledger_documents::value.eq(&row.value),
                ledger_documents::updated_at.eq(row.updated_at),
            ))
            .execute(&mut *self.conn)
            .map_err(|e| StorageFailure::WriteFailed(e.to_string()))?;
        Ok(())
    }
}

/// Ledger backed by a SQLite database.
///
/// Reads go through the connection pool; every unit of work runs on the
/// single writer actor inside an immediate transaction.
#[derive(Clone)]
pub struct SqliteLedger {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteLedger {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Opens (creating and migrating if needed) the ledger database for
    /// `app_data_dir` and starts its writer. Must be called from within a
    /// Tokio runtime.
    pub async fn open(app_data_dir: &str) -> Result<Self> {
        let db_path = init(app_data_dir)?;
        Self::connect(&db_path)
    }

    /// Like [`SqliteLedger::open`], for an explicit database file.
    /// `DATABASE_URL` is not consulted.
    pub async fn open_file(db_path: &str) -> Result<Self> {
        init_db_file(db_path)?;
        Self::connect(db_path)
    }

    fn connect(db_path: &str) -> Result<Self> {
        let pool = create_pool(db_path)?;
        run_migrations(&pool)?;
        let writer = spawn_writer((*pool).clone());
        info!("Ledger database ready at {}", db_path);
        Ok(Self::new(pool, writer))
    }

    pub fn pool(&self) -> &Arc<DbPool> {
        &self.pool
    }
}

#[async_trait]
impl LedgerTransactionExecutor for SqliteLedger {
    async fn execute<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LedgerState) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.writer
            .exec(move |conn| {
                let mut state = SqliteLedgerState::new(conn);
                job(&mut state)
            })
            .await
    }

    fn read<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut dyn StateReader) -> Result<T>,
    {
        let mut conn = get_connection(&self.pool)?;
        let mut state = SqliteLedgerState::new(&mut conn);
        job(&mut state)
    }
}
