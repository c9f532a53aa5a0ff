//! Compose file validation and linting.
//!
//! This module provides the rule-based lint system:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity ([`Diagnostic`])
//! - **Engine** - Batch evaluation and fix orchestration ([`LintEngine`])
//!
//! # Example
//!
//! ```
//! use composelint::document::parse_document;
//! use composelint::lint::{LintEngine, RuleRegistry, Severity};
//!
//! let context = parse_document("docker-compose.yml", "version: '3'\nservices: {}\n").unwrap();
//! let registry = RuleRegistry::with_builtins();
//! let rules: Vec<_> = registry.iter().collect();
//!
//! let outcome = LintEngine::new().evaluate(&context, &rules);
//! assert!(outcome
//!     .diagnostics
//!     .iter()
//!     .any(|d| d.rule.as_str() == "no-version-field" && d.severity == Severity::Minor));
//! ```

pub mod diagnostic;
pub mod edit;
pub mod engine;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;

pub use diagnostic::Diagnostic;
pub use engine::{FixOutcome, LintEngine, LintOutcome, RuleFailure};
pub use output::{FileReport, HumanFormatter, JsonFormatter, LintFormatter, SarifFormatter};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    NoBuildAndImageRule, NoContainerNameRule, NoDuplicateContainerNamesRule, NoVersionFieldRule,
    RequireProjectNameRule,
};
pub use schema::SchemaGenerator;
