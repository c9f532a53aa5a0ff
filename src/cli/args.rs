//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// composelint - Lint Docker Compose files.
#[derive(Debug, Clone, Parser)]
#[command(name = "composelint")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Files or directories to lint (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Path to settings file (overrides .composelint.yml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: human, json, sarif
    #[arg(long)]
    pub format: Option<String>,

    /// Apply auto-fixes and rewrite files in place
    #[arg(long)]
    pub fix: bool,

    /// Treat minor issues as failures
    #[arg(long)]
    pub strict: bool,

    /// Print the settings file JSON Schema and exit
    #[arg(long)]
    pub schema: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
