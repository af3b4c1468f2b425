//! CLI parse: clap types for Trellis. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trellis CLI - declarative project scaffolding
#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Materialize a declarative directory layout with placeholder files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Materialize the layout under the target root
    Materialize {
        /// Target root directory
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Layout manifest (TOML); defaults to the embedded layout
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Walk the layout and report without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Count files matching a name suffix under a root
    Report {
        /// Root directory to walk
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// File name suffix to count (e.g. ".go")
        #[arg(long)]
        suffix: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate a layout manifest without touching the filesystem
    Validate {
        /// Layout manifest (TOML); defaults to the embedded layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}
