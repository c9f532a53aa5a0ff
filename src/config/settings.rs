//! Settings schema for the linter.
//!
//! This module contains the struct definitions that map to the
//! `.composelint.yml` settings file format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Linter settings loaded from `.composelint.yml`.
///
/// Every field has a default so an absent settings file means "all rules
/// enabled, human output".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintSettings {
    /// Per-rule enable/disable switches, keyed by rule id. Rules not listed
    /// here are enabled.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, bool>,

    /// Default output format when no --format flag is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Treat minor issues as failures.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strict: bool,
}

impl LintSettings {
    /// Whether the rule with the given id should run.
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).copied().unwrap_or(true)
    }
}
