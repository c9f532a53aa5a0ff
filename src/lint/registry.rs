//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them. Rules are
//! kept in registration order: fix application folds over the rule set
//! left to right, so iteration order is part of the registry's contract.

use super::rule::{LintRule, RuleId};
use super::rules::{
    NoBuildAndImageRule, NoContainerNameRule, NoDuplicateContainerNamesRule, NoVersionFieldRule,
    RequireProjectNameRule,
};

/// Registry of all available lint rules, in registration order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NoVersionFieldRule));
        registry.register(Box::new(RequireProjectNameRule));
        registry.register(Box::new(NoBuildAndImageRule));
        registry.register(Box::new(NoContainerNameRule));
        registry.register(Box::new(NoDuplicateContainerNamesRule));
        registry
    }

    /// Register a lint rule. A rule with the same id replaces the existing
    /// one in place, keeping its position in the order.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        match self.rules.iter_mut().find(|r| r.id() == rule.id()) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
