//! Lint diagnostic messages.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a lint rule.
///
/// Diagnostics are immutable value objects created fresh on every check
/// invocation. Two diagnostics are equal iff all three fields match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    pub rule: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(rule: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
        }
    }
}
