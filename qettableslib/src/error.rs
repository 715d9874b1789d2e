//! Error types for qettableslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting terminal tables
#[derive(Error, Debug)]
pub enum QetError {
    /// Database file does not exist
    #[error("database file '{}' not found", .0.display())]
    DatabaseNotFound(PathBuf),

    /// Failed to read the requested stylesheet
    #[error("failed to read stylesheet '{}': {source}", .path.display())]
    StylesheetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create or write an output file
    #[error("failed to write '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Query or connection failure
    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
