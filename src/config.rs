//! Configuration System
//!
//! Layered configuration for the builder and CLI. Sources, lowest to highest
//! precedence: built-in defaults, the global config file, the per-directory
//! `.dirnode.toml`, then `DIRNODE__*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Per-directory config file name, looked up in the tree root
pub const WORKSPACE_CONFIG_FILE: &str = ".dirnode.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirnodeConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Filesystem traversal settings used by the tree builder
    #[serde(default)]
    pub walker: WalkerConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Logging(String),
    Walker(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Walker(msg) => write!(f, "Walker: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirnodeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if self.walker.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::Walker(
                "Ignore patterns cannot be empty".to_string(),
            ));
        }

        if self.walker.max_depth == Some(0) {
            errors.push(ValidationError::Walker(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into one `ApiError`
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(messages.join("; "))
        })?;
        Ok(self)
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Global config path (~/.config/dirnode/config.toml on Linux)
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dirnode").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration for a tree rooted at `root`
    pub fn load(root: &Path) -> Result<DirnodeConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;

        if let Some(global) = Self::global_config_path() {
            builder = add_file_if_present(builder, &global);
        }
        builder = add_file_if_present(builder, &root.join(WORKSPACE_CONFIG_FILE));

        with_environment(builder).build()?.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<DirnodeConfig, ConfigError> {
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        with_environment(builder).build()?.try_deserialize()
    }
}

/// Create a Config builder with defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("walker.follow_symlinks", false)?
        .set_default(
            "walker.ignore_patterns",
            vec![".git", "target", WORKSPACE_CONFIG_FILE],
        )
}

fn add_file_if_present(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    if path.exists() {
        builder.add_source(File::from(path).required(false))
    } else {
        builder
    }
}

/// `DIRNODE__LOGGING__LEVEL=debug`, `DIRNODE__WALKER__IGNORE_PATTERNS=.git,dist`
fn with_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("DIRNODE")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("walker.ignore_patterns"),
    )
}
