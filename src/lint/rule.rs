//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Minor, Major, Critical)

use super::diagnostic::Diagnostic;
use crate::document::LintContext;

/// Unique identifier for a lint rule.
///
/// Rule ids are stable, lowercase, hyphenated strings (e.g.
/// `no-version-field`) and are unique within an enabled rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Style or hygiene issue.
    Minor,
    /// Likely misconfiguration.
    Major,
    /// Configuration that will break a deployment.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Minor => write!(f, "minor"),
            Severity::Major => write!(f, "major"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A lint rule that validates one compose document.
///
/// Rules are self-contained units of policy. `check` is a pure function of
/// the context's structural content: the same input always yields the same
/// diagnostics, in first-detected order, and an absence of violations is an
/// empty vector rather than an error.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the document and return any diagnostics.
    ///
    /// Implementations inspect `context.content` only; the raw text is the
    /// domain of [`LintRule::fix`].
    fn check(&self, context: &LintContext) -> Vec<Diagnostic>;

    /// Whether this rule supports auto-fix.
    fn supports_fix(&self) -> bool {
        false
    }

    /// Rewrite raw source text to remove the condition this rule flags.
    ///
    /// Must be idempotent, and must return the input unchanged byte-for-byte
    /// when there is nothing to fix or the target cannot be located
    /// unambiguously. Only consulted when [`LintRule::supports_fix`] is true.
    fn fix(&self, source: &str) -> String {
        source.to_string()
    }
}
