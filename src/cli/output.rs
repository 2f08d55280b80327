//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, NodeError, StorageError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::StorageError(StorageError::Node(NodeError::DuplicateChildName(name))) => format!(
            "Two entries in one directory share the name {:?} (after Unicode normalization)",
            name
        ),
        ApiError::StorageError(StorageError::InvalidPath(msg)) => format!("Invalid path: {}", msg),
        _ => e.to_string(),
    }
}
