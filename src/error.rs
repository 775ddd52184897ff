//! Error types for ColumnKV
//!
//! Provides a unified error type for all operations.
//!
//! A missing key is never an error on the read path (`get` returns `None`).
//! The variants below cover contract violations (bad decodes, use of the
//! transaction handle outside a scope) and the checked mutations
//! (`insert`, `update`, `delete_existing`).

use thiserror::Error;

/// Result type alias using ColumnKvError
pub type Result<T> = std::result::Result<T, ColumnKvError>;

/// Unified error type for ColumnKV operations
#[derive(Debug, Error)]
pub enum ColumnKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Column Family Errors
    // -------------------------------------------------------------------------
    #[error("Key not found in column family {column_family}")]
    KeyNotFound { column_family: String },

    #[error("Key already exists in column family {column_family}")]
    KeyAlreadyExists { column_family: String },

    // -------------------------------------------------------------------------
    // Transaction Errors
    // -------------------------------------------------------------------------
    #[error("No transaction is active on the calling thread")]
    NoActiveTransaction,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("Command error: {0}")]
    Command(String),
}

impl From<bincode::Error> for ColumnKvError {
    fn from(err: bincode::Error) -> Self {
        ColumnKvError::Serialization(err.to_string())
    }
}
