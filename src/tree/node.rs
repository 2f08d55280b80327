//! The node capability shared by directories and leaves

use crate::error::StorageError;
use crate::types::Hash;
use std::fmt;
use std::sync::Arc;

/// Shared handle to any node in a tree
pub type NodeRef = Arc<dyn Node>;

/// Node capability set
///
/// Implemented by [`DirectoryNode`](super::DirectoryNode),
/// [`FileNode`](super::FileNode) and by leaves supplied from outside this
/// crate. The `Display` impl is the node's canonical string form.
pub trait Node: fmt::Display + fmt::Debug + Send + Sync {
    /// Name relative to the parent. Empty only for a root.
    fn name(&self) -> &str;

    /// Deterministic content hash
    fn hash(&self) -> Hash;

    fn is_directory(&self) -> bool;

    /// Children in ascending name order; empty for leaves
    ///
    /// The error channel is for implementers backed by fallible storage.
    fn children(&self) -> Result<Vec<NodeRef>, StorageError>;

    fn child_count(&self) -> Result<usize, StorageError>;
}
