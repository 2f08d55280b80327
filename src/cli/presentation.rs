//! Presentation: text and JSON formatters for tree command results.

use crate::error::{ApiError, StorageError};
use crate::tree::node::Node;
use serde::Serialize;

/// JSON view of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub name: String,
    pub hash: String,
    pub is_directory: bool,
    pub child_count: usize,
    pub canonical: String,
}

impl NodeSummary {
    pub fn from_node(node: &dyn Node) -> Result<Self, StorageError> {
        Ok(Self {
            name: node.name().to_string(),
            hash: hex::encode(node.hash()),
            is_directory: node.is_directory(),
            child_count: node.child_count()?,
            canonical: node.to_string(),
        })
    }
}

/// JSON view of one entry in a children listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    pub name: String,
    pub hash: String,
    pub is_directory: bool,
}

fn child_summaries(node: &dyn Node) -> Result<Vec<ChildSummary>, StorageError> {
    Ok(node
        .children()?
        .iter()
        .map(|child| ChildSummary {
            name: child.name().to_string(),
            hash: hex::encode(child.hash()),
            is_directory: child.is_directory(),
        })
        .collect())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}

pub fn format_hash(node: &dyn Node) -> String {
    hex::encode(node.hash())
}

pub fn format_show_text(node: &dyn Node) -> String {
    node.to_string()
}

pub fn format_show_json(node: &dyn Node) -> Result<String, ApiError> {
    to_json(&NodeSummary::from_node(node)?)
}

/// One line per child: `<hash>  <d|f>  <name>`
pub fn format_children_text(node: &dyn Node) -> Result<String, ApiError> {
    let lines: Vec<String> = child_summaries(node)?
        .iter()
        .map(|c| {
            let kind = if c.is_directory { 'd' } else { 'f' };
            format!("{}  {}  {}", c.hash, kind, c.name)
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn format_children_json(node: &dyn Node) -> Result<String, ApiError> {
    to_json(&child_summaries(node)?)
}
