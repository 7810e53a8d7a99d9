//! Error type for the transaction detail view.

use thiserror::Error;

/// Reasons a detail view could not be populated or updated.
#[derive(Error, Debug)]
pub enum DetailError {
    #[error("No transaction was requested")]
    MissingNavigation,

    #[error("Invalid transaction list position: {0}")]
    InvalidPosition(i64),

    #[error("Invalid transaction hash: {0}")]
    InvalidHash(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("No transaction is loaded")]
    NoTransaction,

    #[error("Notes store rejected the update")]
    NoteRejected,

    #[error("View was torn down before the operation completed")]
    Cancelled,

    #[error("Lookup failed: {0}")]
    Lookup(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DetailError>;
