//! Library integration tests for the lint engine.
//!
//! These exercise the engine contract end to end over parsed documents:
//! diagnostic aggregation order, fix folding, idempotence, and the
//! formatting-preservation guarantees of textual fixes.

use composelint::document::parse_document;
use composelint::lint::{
    Diagnostic, LintEngine, LintRule, NoBuildAndImageRule, NoVersionFieldRule, RuleId,
    RuleRegistry, Severity,
};

const WITH_VERSION: &str = "version: '3'\nservices:\n  web:\n    image: nginx\n";
const WITHOUT_VERSION: &str = "services:\n  web:\n    image: nginx\n";

#[test]
fn version_field_produces_exactly_one_diagnostic() {
    let context = parse_document("/docker-compose.yml", WITH_VERSION).unwrap();
    let rule = NoVersionFieldRule;

    let outcome = LintEngine::new().evaluate(&context, &[&rule]);

    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::new(
            RuleId::new("no-version-field"),
            Severity::Minor,
            "The \"version\" field should not be present.",
        )]
    );
}

#[test]
fn clean_document_produces_no_diagnostics() {
    let context = parse_document("/docker-compose.yml", WITHOUT_VERSION).unwrap();
    let rule = NoVersionFieldRule;

    let outcome = LintEngine::new().evaluate(&context, &[&rule]);

    assert!(outcome.diagnostics.is_empty());
    assert!(outcome.failures.is_empty());
}

#[test]
fn fix_removes_the_version_line_and_nothing_else() {
    let rule = NoVersionFieldRule;

    let outcome = LintEngine::new().apply_fixes(WITH_VERSION, &[&rule]);

    assert!(!outcome.text.contains("version:"));
    assert_eq!(outcome.text, WITHOUT_VERSION);
}

#[test]
fn fix_without_violation_returns_input_unchanged() {
    let rule = NoVersionFieldRule;

    let outcome = LintEngine::new().apply_fixes(WITHOUT_VERSION, &[&rule]);

    assert_eq!(outcome.text.trim(), WITHOUT_VERSION.trim());
    assert_eq!(outcome.text, WITHOUT_VERSION);
}

#[test]
fn fixes_are_idempotent_across_the_builtin_set() {
    let registry = RuleRegistry::with_builtins();
    let rules: Vec<&dyn LintRule> = registry.iter().collect();
    let engine = LintEngine::new();

    let source = "version: '3'\nservices:\n  web:\n    container_name: web\n    image: nginx\n";
    let once = engine.apply_fixes(source, &rules);
    let twice = engine.apply_fixes(&once.text, &rules);

    assert_eq!(once.text, twice.text);
}

#[test]
fn fix_preserves_unrelated_lines_exactly() {
    let source = "# deployment stack\nversion: '3'\n\nservices:\n  web:\n    image: nginx  # pinned upstream\n\n  db:\n    image: postgres\n";
    let rule = NoVersionFieldRule;

    let outcome = LintEngine::new().apply_fixes(source, &[&rule]);

    assert_eq!(
        outcome.text,
        "# deployment stack\n\nservices:\n  web:\n    image: nginx  # pinned upstream\n\n  db:\n    image: postgres\n"
    );
}

#[test]
fn two_rules_one_matching_one_not() {
    // Engine-level scenario: the matching rule reports and fixes, the
    // non-matching rule contributes nothing.
    let context = parse_document("/docker-compose.yml", WITH_VERSION).unwrap();
    let matching = NoVersionFieldRule;
    let non_matching = NoBuildAndImageRule;
    let rules: [&dyn LintRule; 2] = [&matching, &non_matching];
    let engine = LintEngine::new();

    let outcome = engine.evaluate(&context, &rules);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].rule, RuleId::new("no-version-field"));

    let fixed = engine.apply_fixes(WITH_VERSION, &rules);
    assert_eq!(fixed.text, WITHOUT_VERSION);
}

#[test]
fn diagnostics_follow_rule_list_order() {
    let source = "version: '3'\nservices:\n  web:\n    build: .\n    image: nginx\n";
    let context = parse_document("/docker-compose.yml", source).unwrap();
    let version_rule = NoVersionFieldRule;
    let build_rule = NoBuildAndImageRule;
    let engine = LintEngine::new();

    let outcome = engine.evaluate(&context, &[&build_rule, &version_rule]);
    assert_eq!(outcome.diagnostics[0].rule, RuleId::new("no-build-and-image"));
    assert_eq!(outcome.diagnostics[1].rule, RuleId::new("no-version-field"));

    let outcome = engine.evaluate(&context, &[&version_rule, &build_rule]);
    assert_eq!(outcome.diagnostics[0].rule, RuleId::new("no-version-field"));
    assert_eq!(outcome.diagnostics[1].rule, RuleId::new("no-build-and-image"));
}

#[test]
fn evaluation_is_deterministic() {
    let registry = RuleRegistry::with_builtins();
    let rules: Vec<&dyn LintRule> = registry.iter().collect();
    let source = "version: '3'\nservices:\n  api:\n    container_name: app\n  web:\n    container_name: app\n";
    let context = parse_document("/docker-compose.yml", source).unwrap();
    let engine = LintEngine::new();

    let first = engine.evaluate(&context, &rules);
    let second = engine.evaluate(&context, &rules);

    assert_eq!(first.diagnostics, second.diagnostics);
}
