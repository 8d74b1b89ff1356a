//! Dataset error types for got-data.
//!
//! [`DataError`] covers reading the tabular sources, the SQLite backend and
//! row validation.

use thiserror::Error;

/// Errors produced while loading or storing a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// CSV parsing or column mapping failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading a source file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A SQLite operation failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A row holds a value outside its column's domain.
    #[error("invalid value in {table} row {row}: {reason}")]
    InvalidValue {
        table: &'static str,
        row: usize,
        reason: String,
    },

    /// Two node rows share an id but disagree on attributes.
    #[error("conflicting rows for node '{id}'")]
    ConflictingNode { id: String },

    /// Two edge rows share `(from, to)` but disagree on weight.
    #[error("conflicting rows for edge '{from}' -> '{to}'")]
    ConflictingEdge { from: String, to: String },
}
