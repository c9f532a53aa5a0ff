//! Obsolete top-level `version` field detection.
//!
//! The Compose Specification ignores the `version` field; keeping it around
//! only invites confusion about which schema applies.

use crate::document::LintContext;
use crate::lint::edit::remove_top_level_key;
use crate::lint::{Diagnostic, LintRule, RuleId, Severity};

/// Flags (and removes) the obsolete top-level `version` field.
pub struct NoVersionFieldRule;

impl LintRule for NoVersionFieldRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-version-field")
    }

    fn name(&self) -> &str {
        "No Version Field"
    }

    fn description(&self) -> &str {
        "The top-level version field is obsolete and should be removed"
    }

    fn default_severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, context: &LintContext) -> Vec<Diagnostic> {
        if context.content.has_key("version") {
            vec![Diagnostic::new(
                self.id(),
                self.default_severity(),
                "The \"version\" field should not be present.",
            )]
        } else {
            vec![]
        }
    }

    fn supports_fix(&self) -> bool {
        true
    }

    fn fix(&self, source: &str) -> String {
        remove_top_level_key(source, "version")
    }
}
