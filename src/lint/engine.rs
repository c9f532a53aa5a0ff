//! Rule evaluation and fix orchestration.
//!
//! The [`LintEngine`] runs a batch of rules against one document and,
//! separately, drives a fix pass across raw text. It is stateless: each
//! call is independent, with no retained results or caches.

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::diagnostic::Diagnostic;
use super::rule::{LintRule, RuleId};
use crate::document::LintContext;

/// An isolated failure inside a single rule.
///
/// A rule that panics mid-check must not take the rest of the pass down
/// with it; the engine converts the panic into one of these, attributed to
/// the rule's id.
#[derive(Debug, Clone)]
pub struct RuleFailure {
    /// The rule that failed.
    pub rule: RuleId,
    /// The panic payload, as text.
    pub message: String,
}

/// Result of evaluating a rule set over one document.
#[derive(Debug, Clone, Default)]
pub struct LintOutcome {
    /// Diagnostics in rule order, each rule's own results in detection order.
    pub diagnostics: Vec<Diagnostic>,
    /// Rules whose check faulted.
    pub failures: Vec<RuleFailure>,
}

/// Result of one fix pass over raw source text.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    /// The text after all fixable rules were applied once.
    pub text: String,
    /// Rules whose fix faulted; their edits were discarded.
    pub failures: Vec<RuleFailure>,
}

/// Stateless orchestrator for running rules over a document.
pub struct LintEngine;

impl LintEngine {
    /// Create a new lint engine.
    pub fn new() -> Self {
        Self
    }

    /// Run every rule's check against the context, in slice order.
    ///
    /// Each rule's diagnostics are concatenated as produced - no
    /// deduplication, no severity sorting. A rule that panics is recorded
    /// as a [`RuleFailure`] and the remaining rules still run.
    pub fn evaluate(&self, context: &LintContext, rules: &[&dyn LintRule]) -> LintOutcome {
        let mut outcome = LintOutcome::default();

        for rule in rules {
            match catch_unwind(AssertUnwindSafe(|| rule.check(context))) {
                Ok(diagnostics) => outcome.diagnostics.extend(diagnostics),
                Err(payload) => {
                    let failure = RuleFailure {
                        rule: rule.id(),
                        message: panic_message(payload.as_ref()),
                    };
                    tracing::warn!(rule = %failure.rule, "check faulted: {}", failure.message);
                    outcome.failures.push(failure);
                }
            }
        }

        outcome
    }

    /// Fold the fixable rules' fixes over the source text, in slice order.
    ///
    /// The output of one rule's fix is the input of the next, so fix
    /// application is order-sensitive by design; conflicting edits are not
    /// reconciled here. Rules without fix support are skipped. The fold
    /// runs once - converging to a fixed point is the caller's concern.
    /// A rule whose fix panics contributes nothing: the text from before
    /// that rule carries forward.
    pub fn apply_fixes(&self, source: &str, rules: &[&dyn LintRule]) -> FixOutcome {
        let mut text = source.to_string();
        let mut failures = Vec::new();

        for rule in rules {
            if !rule.supports_fix() {
                continue;
            }
            match catch_unwind(AssertUnwindSafe(|| rule.fix(&text))) {
                Ok(fixed) => text = fixed,
                Err(payload) => {
                    let failure = RuleFailure {
                        rule: rule.id(),
                        message: panic_message(payload.as_ref()),
                    };
                    tracing::warn!(rule = %failure.rule, "fix faulted: {}", failure.message);
                    failures.push(failure);
                }
            }
        }

        FixOutcome { text, failures }
    }
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "rule panicked".to_string()
    }
}
