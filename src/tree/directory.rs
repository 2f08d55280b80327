//! Immutable directory node with memoized content hash

use crate::error::{NodeError, StorageError};
use crate::tree::hasher;
use crate::tree::node::{Node, NodeRef};
use crate::types::Hash;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

const DIR_START_MARK: char = '(';
const DIR_END_MARK: char = ')';
const DIR_ELEMENT_SEP: char = ' ';

/// Directory node representation
///
/// Children are sorted by name (byte-wise) at construction and never change
/// afterwards. The hash is computed on first use and cached for the life of
/// the node.
#[derive(Debug)]
pub struct DirectoryNode {
    name: String,
    children: Vec<NodeRef>,
    hash: OnceLock<Hash>,
}

impl DirectoryNode {
    /// Create a directory from a name and a candidate list of children
    ///
    /// The list is taken by value and sorted by name. `name` may be empty
    /// when this node is a root; children may not have empty names, and no
    /// two children may share a name.
    pub fn new(name: impl Into<String>, children: Vec<NodeRef>) -> Result<Self, NodeError> {
        let name = name.into();
        let mut children = children;
        children.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));

        if has_children_with_no_name(&children) {
            return Err(NodeError::EmptyChildName);
        }

        if let Some(duplicate) = find_duplicated_name(&children) {
            return Err(NodeError::DuplicateChildName(duplicate.to_string()));
        }

        trace!(name = %name, child_count = children.len(), "Created directory node");

        Ok(Self {
            name,
            children,
            hash: OnceLock::new(),
        })
    }

    /// Look up a direct child by name
    pub fn child(&self, name: &str) -> Option<NodeRef> {
        self.children
            .binary_search_by(|c| c.name().as_bytes().cmp(name.as_bytes()))
            .ok()
            .map(|i| self.children[i].clone())
    }

    fn calculate_hash(&self) -> Hash {
        let hash = hasher::compute_directory_hash(
            self.children.iter().map(|c| (c.name(), c.hash())),
        );
        trace!(name = %self.name, hash = %hex::encode(hash), "Computed directory hash");
        hash
    }
}

fn has_children_with_no_name(children: &[NodeRef]) -> bool {
    children.iter().any(|c| c.name().is_empty())
}

/// Requires `children` sorted by name, so equal names are adjacent.
fn find_duplicated_name(children: &[NodeRef]) -> Option<&str> {
    children
        .windows(2)
        .find(|pair| pair[0].name() == pair[1].name())
        .map(|pair| pair[0].name())
}

impl Node for DirectoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn hash(&self) -> Hash {
        *self.hash.get_or_init(|| self.calculate_hash())
    }

    fn is_directory(&self) -> bool {
        true
    }

    fn children(&self) -> Result<Vec<NodeRef>, StorageError> {
        Ok(self.children.clone())
    }

    fn child_count(&self) -> Result<usize, StorageError> {
        Ok(self.children.len())
    }
}

/// Renders as `name(child_0 child_1 ...)` with children in sorted order,
/// so equal trees always produce equal strings.
impl fmt::Display for DirectoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, DIR_START_MARK)?;
        for (i, child) in self.children.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", DIR_ELEMENT_SEP)?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "{}", DIR_END_MARK)
    }
}
