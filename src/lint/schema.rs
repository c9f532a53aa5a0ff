//! JSON Schema generation for the composelint settings file.
//!
//! This module generates a JSON Schema (Draft-07) for `.composelint.yml`,
//! enabling IDE autocomplete and validation.

use serde_json::{json, Value};

use super::registry::RuleRegistry;

/// Generates JSON Schema for the composelint settings file.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for `.composelint.yml`.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://composelint.dev/schemas/settings.json",
            "title": "composelint Settings",
            "description": "Settings schema for the composelint linter",
            "type": "object",
            "properties": {
                "rules": self.rules_schema(),
                "format": {
                    "type": "string",
                    "enum": ["human", "json", "sarif"],
                    "description": "Default output format"
                },
                "strict": {
                    "type": "boolean",
                    "default": false,
                    "description": "Treat minor issues as failures"
                }
            },
            "additionalProperties": false
        })
    }

    /// Generate schema for the per-rule switches, one named property per
    /// built-in rule.
    fn rules_schema(&self) -> Value {
        let registry = RuleRegistry::with_builtins();
        let properties: serde_json::Map<String, Value> = registry
            .iter()
            .map(|rule| {
                (
                    rule.id().0,
                    json!({
                        "type": "boolean",
                        "description": rule.description()
                    }),
                )
            })
            .collect();

        json!({
            "type": "object",
            "description": "Per-rule enable/disable switches, keyed by rule id",
            "properties": properties,
            "additionalProperties": { "type": "boolean" }
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
