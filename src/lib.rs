//! composelint - Rule-based linter and auto-fixer for Docker Compose files.
//!
//! composelint parses a compose file into a structural tree, evaluates a
//! set of independent lint rules against it, and can rewrite the original
//! source text to fix what the fixable rules flag - without disturbing
//! comments, ordering, or formatting anywhere else in the file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Linter settings loading (`.composelint.yml`)
//! - [`discovery`] - Compose file discovery
//! - [`document`] - The paired structural/textual document model
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, diagnostics, and the lint engine
//!
//! # Example
//!
//! ```
//! use composelint::document::parse_document;
//! use composelint::lint::{LintEngine, NoVersionFieldRule};
//!
//! let source = "version: '3'\nservices:\n  web:\n    image: nginx\n";
//! let context = parse_document("docker-compose.yml", source).unwrap();
//!
//! let rule = NoVersionFieldRule;
//! let outcome = LintEngine::new().evaluate(&context, &[&rule]);
//! assert_eq!(outcome.diagnostics.len(), 1);
//!
//! let fixed = LintEngine::new().apply_fixes(source, &[&rule]);
//! assert!(!fixed.text.contains("version:"));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod lint;

pub use error::{ComposelintError, Result};
