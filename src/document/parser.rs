//! Compose file loading and parsing.
//!
//! Parsing establishes the [`LintContext`] invariant: the structural tree
//! and the original text are captured together, from the same bytes.

use std::fs;
use std::path::Path;

use crate::document::{LintContext, YamlNode};
use crate::error::{ComposelintError, Result};

/// Parse compose source text into a [`LintContext`].
///
/// `path` is carried through for reporting only. An empty (or
/// whitespace-only) document parses to an empty scalar root.
///
/// # Errors
///
/// Returns `ParseError` if the text is not valid YAML.
pub fn parse_document(path: impl Into<String>, source: &str) -> Result<LintContext> {
    let path = path.into();

    if source.trim().is_empty() {
        return Ok(LintContext::new(path, YamlNode::Scalar(String::new()), source));
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(source).map_err(|e| ComposelintError::ParseError {
            path: Path::new(&path).to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(LintContext::new(path, YamlNode::from(value), source))
}

/// Read a compose file from disk and parse it.
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist.
/// Returns `ParseError` if the YAML is invalid.
pub fn load_document(path: &Path) -> Result<LintContext> {
    let source = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ComposelintError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ComposelintError::Io(e)
        }
    })?;

    parse_document(path.display().to_string(), &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_source_into_both_forms() {
        let source = "version: '3'\nservices:\n  web:\n    image: nginx\n";
        let context = parse_document("docker-compose.yml", source).unwrap();

        assert_eq!(context.source_code, source);
        assert!(context.content.has_key("version"));
        assert!(context.content.has_key("services"));
    }

    #[test]
    fn preserves_source_byte_for_byte() {
        let source = "# header comment\nservices:\n\n  web:\n    image: nginx   # trailing\n\n";
        let context = parse_document("compose.yml", source).unwrap();

        assert_eq!(context.source_code, source);
    }

    #[test]
    fn empty_document_parses_to_empty_scalar() {
        let context = parse_document("compose.yml", "").unwrap();
        assert_eq!(context.content.as_scalar(), Some(""));

        let context = parse_document("compose.yml", "   \n\n").unwrap();
        assert_eq!(context.content.as_scalar(), Some(""));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let result = parse_document("compose.yml", "services:\n  web: [unclosed\n");
        assert!(matches!(
            result,
            Err(ComposelintError::ParseError { .. })
        ));
    }

    #[test]
    fn load_document_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docker-compose.yml");
        fs::write(&path, "services:\n  web:\n    image: nginx\n").unwrap();

        let context = load_document(&path).unwrap();
        assert!(context.content.has_key("services"));
        assert!(context.path.ends_with("docker-compose.yml"));
    }

    #[test]
    fn load_document_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_document(&temp.path().join("absent.yml"));
        assert!(matches!(
            result,
            Err(ComposelintError::FileNotFound { .. })
        ));
    }
}
