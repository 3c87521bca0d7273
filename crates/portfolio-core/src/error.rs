//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Project was not found in the store
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Two records in one document share an id
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    /// Project source string could not be interpreted
    #[error("Invalid project source: {0}")]
    InvalidSource(String),

    /// Error during JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// Request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Nothing cached for a request while the network is down
    #[error("Not cached: {0}")]
    NotCached(String),

    /// Cache entry could not be encoded or decoded
    #[error("Cache encoding error: {0}")]
    CacheEncoding(#[from] postcard::Error),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
