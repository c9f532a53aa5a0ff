//! Compose file discovery.
//!
//! Explicit file arguments are linted as given; directory arguments are
//! searched recursively for files matching the standard compose names.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ComposelintError, Result};

/// Directories never descended into during discovery.
const SKIPPED_DIRS: [&str; 2] = ["node_modules", "vendor"];

/// Whether a file name looks like a compose file.
///
/// Covers `compose.yml`/`compose.yaml`, the `docker-compose` prefix
/// variants, and override files such as `docker-compose.override.yml`.
pub fn is_compose_file(name: &str) -> bool {
    let Some(stem) = name
        .strip_suffix(".yml")
        .or_else(|| name.strip_suffix(".yaml"))
    else {
        return false;
    };

    stem == "compose"
        || stem == "docker-compose"
        || stem.starts_with("compose.")
        || stem.starts_with("docker-compose.")
}

/// Discover compose files under the given paths.
///
/// File paths are taken as-is (they were named deliberately, whatever they
/// are called); directories are walked recursively. Results are sorted and
/// deduplicated so a run is deterministic regardless of argument order.
///
/// # Errors
///
/// Returns `FileNotFound` for an explicit path that doesn't exist, and
/// `NoFilesFound` when the search turns up nothing at all.
pub fn discover_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_file() {
            found.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, &mut found)?;
        } else {
            return Err(ComposelintError::FileNotFound { path: path.clone() });
        }
    }

    found.sort();
    found.dedup();

    if found.is_empty() {
        let searched = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ComposelintError::NoFilesFound { searched });
    }

    Ok(found)
}

fn walk_dir(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if path.is_dir() {
            if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
                continue;
            }
            walk_dir(&path, found)?;
        } else if is_compose_file(&name) {
            found.push(path);
        }
    }
    Ok(())
}
