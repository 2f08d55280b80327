//! Leaf node holding file contents in memory

use crate::error::StorageError;
use crate::tree::hasher;
use crate::tree::node::{Node, NodeRef};
use crate::types::Hash;
use std::fmt;

const FILE_START_MARK: char = '<';
const FILE_END_MARK: char = '>';

/// File node representation
///
/// The hash covers the contents only, so a renamed file keeps its hash.
#[derive(Debug, Clone)]
pub struct FileNode {
    name: String,
    contents: Vec<u8>,
    hash: Hash,
}

impl FileNode {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        let contents = contents.into();
        let hash = hasher::compute_file_hash(&contents);
        Self {
            name: name.into(),
            contents,
            hash,
        }
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

impl Node for FileNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn hash(&self) -> Hash {
        self.hash
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn children(&self) -> Result<Vec<NodeRef>, StorageError> {
        Ok(Vec::new())
    }

    fn child_count(&self) -> Result<usize, StorageError> {
        Ok(0)
    }
}

/// Renders as `name<contents>`
impl fmt::Display for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.name,
            FILE_START_MARK,
            String::from_utf8_lossy(&self.contents),
            FILE_END_MARK
        )
    }
}
