use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when interacting with the forum store.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to connect to the database
    #[error("failed to open database at {path}: {source}")]
    ConnectionFailed {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    /// Database migration failed
    #[error("migration failed: {0}")]
    MigrationFailed(#[from] sqlx::migrate::MigrateError),

    /// I/O error during database operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLx error during query execution
    #[error("database query error: {0}")]
    Query(#[from] sqlx::Error),

    /// Invalid file path for SQLite database
    #[error("invalid sqlite path: {0}")]
    InvalidPath(PathBuf),

    /// Failed to create database directory
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create database file
    #[error("failed to create database file {path}: {source}")]
    FileCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spawn blocking task panicked
    #[error("background task panicked: {0}")]
    TaskPanicked(String),
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
