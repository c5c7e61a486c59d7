use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, StorageError};
use fundledger_core::errors::Result;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File name of the ledger database inside the app data directory.
pub const DB_FILE_NAME: &str = "ledger.db";

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

/// Prepares the database file and returns its path.
pub fn init(app_data_dir: &str) -> Result<String> {
    let db_path = get_db_path(app_data_dir);
    init_db_file(&db_path)?;
    Ok(db_path)
}

/// Creates the parent directory of `db_path` and applies the file-level pragmas.
pub fn init_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(StorageError::from)?;
        }
    }

    let mut conn = SqliteConnection::establish(db_path).map_err(StorageError::from)?;
    conn.batch_execute(
        "
            PRAGMA journal_mode = WAL;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous  = NORMAL;
        ",
    )
    .map_err(StorageError::from)?;

    Ok(())
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .min_idle(Some(1))
        .connection_timeout(std::time::Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer {}))
        .build(manager)
        .into_core()?;
    Ok(Arc::new(pool))
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let result = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        StorageError::MigrationFailed(e.to_string())
    })?;

    if result.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &result {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

/// `DATABASE_URL` when set, `<app_data_dir>/ledger.db` otherwise.
pub fn get_db_path(app_data_dir: &str) -> String {
    resolve_db_path(app_data_dir, std::env::var("DATABASE_URL").ok())
}

/// Picks `database_url` when given, `<app_data_dir>/ledger.db` otherwise.
pub fn resolve_db_path(app_data_dir: &str, database_url: Option<String>) -> String {
    database_url.unwrap_or_else(|| {
        Path::new(app_data_dir)
            .join(DB_FILE_NAME)
            .to_string_lossy()
            .into_owned()
    })
}

/// Gets a connection from the pool
pub fn get_connection(pool: &Pool<ConnectionManager<SqliteConnection>>) -> Result<DbConnection> {
    pool.get().into_core()
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
        )
        .map_err(diesel::r2d2::Error::QueryError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ledger_documents;
    use diesel::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_db_path_defaults_to_app_data_dir() {
        let path = resolve_db_path("/tmp/fundledger", None);
        assert_eq!(
            Path::new(&path),
            Path::new("/tmp/fundledger").join(DB_FILE_NAME)
        );
    }

    #[test]
    fn test_resolve_db_path_prefers_database_url() {
        let path = resolve_db_path("/tmp/fundledger", Some("/var/lib/ledger.db".to_string()));
        assert_eq!(path, "/var/lib/ledger.db");
    }

    #[test]
    fn test_init_db_file_creates_missing_directories() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("nested").join(DB_FILE_NAME);
        init_db_file(&db_path.to_string_lossy()).expect("Failed to init db file");
        assert!(db_path.exists());
    }

    #[test]
    fn test_migrations_create_document_table() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        // Second run has nothing to apply.
        run_migrations(&pool).expect("Failed to re-run migrations");

        let mut conn = get_connection(&pool).expect("Failed to get connection");
        let rows: i64 = ledger_documents::table
            .count()
            .get_result(&mut conn)
            .expect("ledger_documents should exist");
        assert_eq!(rows, 0);
    }
}
