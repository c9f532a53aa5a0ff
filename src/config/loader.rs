//! Settings file discovery and loading.
//!
//! This module handles finding and loading the `.composelint.yml` settings
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::LintSettings;
use crate::error::{ComposelintError, Result};

/// Settings file names, tried in order.
const SETTINGS_FILE_NAMES: [&str; 2] = [".composelint.yml", ".composelint.yaml"];

/// Find the settings file by walking up from `start`.
///
/// # Returns
///
/// The path to the nearest settings file, or None if there is none up to
/// the filesystem root.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in SETTINGS_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a settings file and parse it into [`LintSettings`].
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist.
/// Returns `SettingsError` if the YAML is invalid or has unknown fields.
pub fn load_settings_file(path: &Path) -> Result<LintSettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ComposelintError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ComposelintError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| ComposelintError::SettingsError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the effective settings for a run.
///
/// An explicit path (from `--config`) must exist; otherwise the settings
/// file is discovered by walking up from `start`, and its absence simply
/// yields the defaults.
pub fn load_settings(start: &Path, explicit: Option<&Path>) -> Result<LintSettings> {
    if let Some(path) = explicit {
        return load_settings_file(path);
    }

    match find_settings_file(start) {
        Some(path) => {
            tracing::debug!("using settings from {}", path.display());
            load_settings_file(&path)
        }
        None => Ok(LintSettings::default()),
    }
}
