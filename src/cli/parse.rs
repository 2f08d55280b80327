//! CLI parse: clap types for dirnode. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Dirnode CLI - content-addressed directory trees
#[derive(Parser)]
#[command(name = "dirnode")]
#[command(about = "Build a content-addressed tree from a directory and print its hash")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the hex hash of the tree rooted at PATH
    Hash {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Print the canonical string form of the tree rooted at PATH
    Show {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the direct children of PATH in sorted order with their hashes
    Children {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Commands {
    /// Tree root the command operates on
    pub fn path(&self) -> &Path {
        match self {
            Commands::Hash { path }
            | Commands::Show { path, .. }
            | Commands::Children { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
