//! Document model for compose files.
//!
//! A linted document exists in two synchronized forms:
//!
//! - **Structural** - a [`YamlNode`] tree used by rule checks
//! - **Textual** - the exact original source, used by auto-fixes
//!
//! Both forms travel together in a [`LintContext`] so that checks can make
//! structural queries while fixes perform textual surgery that preserves
//! comments and formatting.

pub mod context;
pub mod node;
pub mod parser;

pub use context::LintContext;
pub use node::{Mapping, YamlNode};
pub use parser::{load_document, parse_document};
