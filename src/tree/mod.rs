//! Content-Addressed Node Tree
//!
//! Directories and files share the [`Node`] capability set. A directory's
//! hash is derived from its children's names and hashes, so the root hash
//! of a tree identifies its entire contents.

pub mod builder;
pub mod directory;
pub mod file;
pub mod hasher;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::TreeBuilder;
pub use directory::DirectoryNode;
pub use file::FileNode;
pub use node::{Node, NodeRef};
