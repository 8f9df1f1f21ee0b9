//! Error types for the version storage layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No version stored under the given id
    #[error("Version not found: {id}")]
    NotFound { id: String },

    /// The supplied version record is incomplete
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
