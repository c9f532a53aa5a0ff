//! Hardcoded `container_name` detection and removal.

use crate::document::LintContext;
use crate::lint::edit::remove_nested_key;
use crate::lint::{Diagnostic, LintRule, RuleId, Severity};

/// Flags services that pin a `container_name`, which prevents scaling the
/// service and collides across stacks sharing a Docker host.
pub struct NoContainerNameRule;

impl LintRule for NoContainerNameRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-container-name")
    }

    fn name(&self) -> &str {
        "No Container Name"
    }

    fn description(&self) -> &str {
        "Services should not pin container_name"
    }

    fn default_severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, context: &LintContext) -> Vec<Diagnostic> {
        let Some(services) = context.content.get("services").and_then(|s| s.as_mapping()) else {
            return vec![];
        };

        let mut diagnostics = Vec::new();
        for (service_name, service) in services {
            if service.has_key("container_name") {
                diagnostics.push(Diagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Service \"{}\" should not have \"container_name\" defined.",
                        service_name
                    ),
                ));
            }
        }
        diagnostics
    }

    fn supports_fix(&self) -> bool {
        true
    }

    fn fix(&self, source: &str) -> String {
        remove_nested_key(source, "container_name")
    }
}
