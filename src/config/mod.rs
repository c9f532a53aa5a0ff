//! Linter settings loading and parsing.
//!
//! This module handles the `.composelint.yml` settings file:
//! - Schema definitions in [`settings`]
//! - File discovery and loading in [`loader`]
//!
//! The settings file is discovered by walking up from the working
//! directory, so one file at a repository root covers every compose file
//! beneath it. An explicit `--config` path overrides discovery.

pub mod loader;
pub mod settings;

pub use loader::{find_settings_file, load_settings, load_settings_file};
pub use settings::LintSettings;
