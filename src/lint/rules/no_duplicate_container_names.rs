//! Duplicate `container_name` detection.

use std::collections::BTreeMap;

use crate::document::LintContext;
use crate::lint::{Diagnostic, LintRule, RuleId, Severity};

/// Flags two services sharing a `container_name`, which makes the stack
/// impossible to bring up.
pub struct NoDuplicateContainerNamesRule;

impl LintRule for NoDuplicateContainerNamesRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-duplicate-container-names")
    }

    fn name(&self) -> &str {
        "No Duplicate Container Names"
    }

    fn description(&self) -> &str {
        "Container names must be unique across services"
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, context: &LintContext) -> Vec<Diagnostic> {
        let Some(services) = context.content.get("services").and_then(|s| s.as_mapping()) else {
            return vec![];
        };

        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        let mut diagnostics = Vec::new();
        for (service_name, service) in services {
            let Some(container_name) = service.get("container_name").and_then(|n| n.as_scalar())
            else {
                continue;
            };
            match seen.get(container_name) {
                Some(first) => diagnostics.push(Diagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Services \"{}\" and \"{}\" use the same container name \"{}\".",
                        first, service_name, container_name
                    ),
                )),
                None => {
                    seen.insert(container_name, service_name.as_str());
                }
            }
        }
        diagnostics
    }
}
