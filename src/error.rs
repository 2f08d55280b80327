//! Error types for the directory node tree.

use thiserror::Error;

/// Node construction errors
///
/// Construction is all-or-nothing: when one of these is returned no node
/// was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("Non-root inner nodes cannot have empty names")]
    EmptyChildName,

    #[error("Children cannot have duplicated names: {0:?}")]
    DuplicateChildName(String),
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid node: {0}")]
    Node(#[from] NodeError),
}

/// API-level errors (configuration, logging, CLI routing)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<NodeError> for ApiError {
    fn from(err: NodeError) -> Self {
        ApiError::StorageError(StorageError::Node(err))
    }
}
