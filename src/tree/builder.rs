//! Tree builder for constructing directory node trees from the filesystem

use crate::error::StorageError;
use crate::tree::directory::DirectoryNode;
use crate::tree::file::FileNode;
use crate::tree::node::{Node, NodeRef};
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use crate::types::Hash;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Tree builder for constructing filesystem Merkle trees
pub struct TreeBuilder {
    root: PathBuf,
    root_name: String,
    walker_config: Option<WalkerConfig>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            root_name: String::new(),
            walker_config: None,
        }
    }

    /// Set walker config (ignore patterns, etc.). When set, the walker uses this config
    /// instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Name given to the root node (default: empty)
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Build the complete tree from the filesystem
    ///
    /// Directories are processed deepest first, so every directory's
    /// children exist before the directory itself is constructed.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<DirectoryNode, StorageError> {
        let start = Instant::now();
        info!("Starting tree build");

        let root = path::canonicalize_path(&self.root)?;

        // Step 1: Walk filesystem and collect entries
        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(root.clone(), config.clone()),
            None => Walker::new(root.clone()),
        };
        let entries = match walker.walk() {
            Ok(e) => {
                debug!(entry_count = e.len(), "Walked filesystem");
                e
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        // Step 2: Files become leaves under their parent directory
        let mut pending: HashMap<PathBuf, Vec<NodeRef>> = HashMap::new();
        let mut directories = Vec::new();

        for entry in entries {
            match entry {
                Entry::File { path } => {
                    let file = self.read_file(&path)?;
                    add_to_parent(&mut pending, &path, Arc::new(file))?;
                }
                Entry::Directory { path } => directories.push(path),
            }
        }

        // Step 3: Directories bottom-up (deepest first)
        directories.sort_by(|a, b| {
            let depth_a = a.components().count();
            let depth_b = b.components().count();
            depth_b.cmp(&depth_a)
        });

        let mut node_count = 0usize;
        for dir_path in directories {
            let children = pending.remove(&dir_path).unwrap_or_default();
            node_count += children.len();
            let name = path::node_name(&dir_path)?;
            let dir_node = DirectoryNode::new(name, children).map_err(|e| {
                error!(path = %dir_path.display(), "Invalid directory: {}", e);
                e
            })?;
            add_to_parent(&mut pending, &dir_path, Arc::new(dir_node))?;
        }

        // Step 4: Root
        let children = pending.remove(&root).unwrap_or_default();
        node_count += children.len();
        let tree = DirectoryNode::new(self.root_name.clone(), children)?;

        let duration = start.elapsed();
        info!(
            node_count = node_count + 1,
            root_hash = %hex::encode(tree.hash()),
            duration_ms = duration.as_millis(),
            "Tree build completed"
        );

        Ok(tree)
    }

    /// Compute root hash of the directory
    ///
    /// This is a convenience method that builds the tree and returns the root hash.
    pub fn compute_root(&self) -> Result<Hash, StorageError> {
        let tree = self.build()?;
        Ok(tree.hash())
    }

    /// Read a file into a leaf node
    #[instrument(skip(self), fields(path = %file_path.display()))]
    fn read_file(&self, file_path: &Path) -> Result<FileNode, StorageError> {
        trace!("Reading file");
        let content = std::fs::read(file_path).map_err(|e| {
            error!("Failed to read file: {}", e);
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to read file {:?}: {}", file_path, e),
            ))
        })?;

        let name = path::node_name(file_path)?;
        Ok(FileNode::new(name, content))
    }
}

fn add_to_parent(
    pending: &mut HashMap<PathBuf, Vec<NodeRef>>,
    child_path: &Path,
    node: NodeRef,
) -> Result<(), StorageError> {
    let parent = child_path.parent().ok_or_else(|| {
        StorageError::InvalidPath(format!("Entry has no parent directory: {:?}", child_path))
    })?;
    pending.entry(parent.to_path_buf()).or_default().push(node);
    Ok(())
}
