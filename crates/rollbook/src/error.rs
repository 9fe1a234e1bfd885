//! Error types for rollbook.
//!
//! Two kinds of failure reach the front end: validation rejections, which
//! leave the store untouched and carry a user-facing reason, and storage
//! failures, which abort the operation. Everything else is ambient
//! (configuration, I/O, serialization).

use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ValidationError;

/// The main error type for rollbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// Form input was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete was requested without a roll number.
    #[error("roll number required")]
    IdentifierRequired,

    /// The three-digit sequence of the roll number has run out.
    #[error("no roll numbers left: next sequence would be {next}")]
    IdentifierExhausted {
        /// The sequence number that could not be encoded.
        next: i64,
    },

    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// A stored row holds a value no valid record could have.
    #[error("corrupt row: column '{column}' holds {value:?}")]
    CorruptRow {
        /// Name of the offending column.
        column: &'static str,
        /// The value found in storage.
        value: String,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rollbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error is a recoverable input rejection.
    ///
    /// The caller should re-prompt; no state was changed.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::IdentifierRequired)
    }

    /// Check if this error came from the persistence layer.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::DatabaseMigration { .. }
                | Self::CorruptRow { .. }
                | Self::DirectoryCreate { .. }
        )
    }
}
