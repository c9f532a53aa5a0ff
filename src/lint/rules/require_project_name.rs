//! Top-level project `name` presence check.

use crate::document::LintContext;
use crate::lint::{Diagnostic, LintRule, RuleId, Severity};

/// Requires the top-level `name` field so the project name doesn't depend
/// on the directory the stack happens to be started from.
pub struct RequireProjectNameRule;

impl LintRule for RequireProjectNameRule {
    fn id(&self) -> RuleId {
        RuleId::new("require-project-name-field")
    }

    fn name(&self) -> &str {
        "Require Project Name Field"
    }

    fn description(&self) -> &str {
        "Compose files should declare an explicit top-level name"
    }

    fn default_severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, context: &LintContext) -> Vec<Diagnostic> {
        // Non-mapping roots (empty documents) are a parsing concern, not a
        // missing-field violation.
        let Some(root) = context.content.as_mapping() else {
            return vec![];
        };

        if root.contains_key("name") {
            vec![]
        } else {
            vec![Diagnostic::new(
                self.id(),
                self.default_severity(),
                "The \"name\" field should be present.",
            )]
        }
    }
}
