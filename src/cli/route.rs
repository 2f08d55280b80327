//! CLI route: single route table and run context. Dispatches to the tree builder and presentation.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_children_json, format_children_text, format_hash, format_show_json, format_show_text,
};
use crate::config::{ConfigLoader, DirnodeConfig};
use crate::error::ApiError;
use crate::tree::{DirectoryNode, TreeBuilder};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: tree root and loaded configuration.
pub struct RunContext {
    root: PathBuf,
    config: DirnodeConfig,
}

impl RunContext {
    /// Create run context from a tree root and optional config path. Uses ConfigLoader only.
    ///
    /// Without an explicit config path, `<root>/.dirnode.toml` is consulted.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&root)?,
        };
        let config = config.validated()?;
        Ok(Self { root, config })
    }

    /// Create run context from an already-loaded configuration.
    pub fn with_config(root: PathBuf, config: DirnodeConfig) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &DirnodeConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Execute a command against the tree at the context root and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let start = Instant::now();
        let tree = self.build_tree()?;

        let output = match command {
            Commands::Hash { .. } => format_hash(&tree),
            Commands::Show { format, .. } => match format {
                OutputFormat::Text => format_show_text(&tree),
                OutputFormat::Json => format_show_json(&tree)?,
            },
            Commands::Children { format, .. } => match format {
                OutputFormat::Text => format_children_text(&tree)?,
                OutputFormat::Json => format_children_json(&tree)?,
            },
        };

        debug!(duration_ms = start.elapsed().as_millis(), "Command executed");
        Ok(output)
    }

    fn build_tree(&self) -> Result<DirectoryNode, ApiError> {
        info!(root = %self.root.display(), "Building tree");

        let tree = TreeBuilder::new(self.root.clone())
            .with_walker_config(self.config.walker.clone())
            .build()?;
        Ok(tree)
    }
}
