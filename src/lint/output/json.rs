//! JSON output formatter.
//!
//! Formats lint results as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::{FileReport, LintFormatter};
use crate::lint::Severity;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<JsonFile>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    diagnostics: Vec<JsonDiagnostic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<JsonFailure>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule: String,
    severity: String,
    message: String,
}

#[derive(Serialize)]
struct JsonFailure {
    rule: String,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    critical: usize,
    major: usize,
    minor: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let files: Vec<_> = reports
            .iter()
            .map(|report| JsonFile {
                path: report.path.clone(),
                diagnostics: report
                    .diagnostics
                    .iter()
                    .map(|d| JsonDiagnostic {
                        rule: d.rule.0.clone(),
                        severity: d.severity.to_string(),
                        message: d.message.clone(),
                    })
                    .collect(),
                failures: report
                    .failures
                    .iter()
                    .map(|f| JsonFailure {
                        rule: f.rule.0.clone(),
                        message: f.message.clone(),
                    })
                    .collect(),
            })
            .collect();

        let all = reports.iter().flat_map(|r| r.diagnostics.iter());
        let summary = JsonSummary {
            total: reports.iter().map(|r| r.diagnostics.len()).sum(),
            critical: all
                .clone()
                .filter(|d| d.severity == Severity::Critical)
                .count(),
            major: all.clone().filter(|d| d.severity == Severity::Major).count(),
            minor: all.filter(|d| d.severity == Severity::Minor).count(),
        };

        let output = JsonOutput { files, summary };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}
