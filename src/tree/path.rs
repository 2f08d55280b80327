//! Path canonicalization and child-name normalization

use crate::error::StorageError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a tree root
///
/// Resolves symlinks, `..` and `.` so that walker entries and builder
/// lookups agree on one spelling of every path.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, StorageError> {
    dunce::canonicalize(path)
        .map_err(|e| StorageError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e)))
}

/// Normalize a filesystem entry name for use as a node name
///
/// Unicode is normalized to NFC so that the same name written with
/// combining characters hashes identically.
pub fn normalize_name(name: &OsStr) -> String {
    name.to_string_lossy().nfc().collect()
}

/// Node name for a path: its final component, normalized
pub fn node_name(path: &Path) -> Result<String, StorageError> {
    path.file_name()
        .map(normalize_name)
        .ok_or_else(|| StorageError::InvalidPath(format!("Path has no final component: {:?}", path)))
}
