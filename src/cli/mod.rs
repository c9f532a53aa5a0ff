//! Command-line interface for composelint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the lint command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`lint`] - The lint run itself

pub mod args;
pub mod lint;

pub use args::Cli;
pub use lint::{CommandResult, LintCommand};
