//! Conflicting `build` and `image` detection.

use crate::document::LintContext;
use crate::lint::{Diagnostic, LintRule, RuleId, Severity};

/// Flags services that declare both `build` and `image`, where the resolved
/// image depends on which of the two the engine happens to prefer.
pub struct NoBuildAndImageRule;

impl LintRule for NoBuildAndImageRule {
    fn id(&self) -> RuleId {
        RuleId::new("no-build-and-image")
    }

    fn name(&self) -> &str {
        "No Build And Image"
    }

    fn description(&self) -> &str {
        "A service should use either build or image, not both"
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, context: &LintContext) -> Vec<Diagnostic> {
        let Some(services) = context.content.get("services").and_then(|s| s.as_mapping()) else {
            return vec![];
        };

        let mut diagnostics = Vec::new();
        for (service_name, service) in services {
            if service.has_key("build") && service.has_key("image") {
                diagnostics.push(Diagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Service \"{}\" should not use both \"build\" and \"image\".",
                        service_name
                    ),
                ));
            }
        }
        diagnostics
    }
}
