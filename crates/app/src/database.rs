//! Database connection management

use std::path::Path;

use sqlx::{
    SqlitePool,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to create database directory {path}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open database")]
    Connect(#[source] sqlx::Error),

    #[error("failed to migrate database")]
    Migrate(#[source] MigrateError),
}

/// Open (creating if absent) the SQLite database file at `path`.
///
/// The parent directory is created when missing. WAL journaling lets readers
/// proceed while a writer holds the lock.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database
/// cannot be opened.
pub async fn open(path: &Path, max_connections: u32) -> Result<SqlitePool, DatabaseError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| DatabaseError::CreateDirectory {
                path: parent.display().to_string(),
                source,
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    debug!(path = %path.display(), max_connections, "opening database");

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connect)
}

/// Ensure the schema exists. Safe to call on every start.
///
/// # Errors
///
/// Returns an error when a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(DatabaseError::Migrate)?;

    info!("database schema is up to date");

    Ok(())
}

/// Storage handle shared by every request. SQLite serialises writers
/// itself, so callers take no application-level lock.
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
