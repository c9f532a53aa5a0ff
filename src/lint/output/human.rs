//! Human-readable output formatter.
//!
//! Formats lint results for terminal display with optional color support.

use std::io::Write;

use console::style;

use super::{FileReport, LintFormatter};
use crate::lint::Severity;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let prefix = severity.to_string();
        if !self.use_color {
            return prefix;
        }
        match severity {
            Severity::Minor => style(prefix).yellow().to_string(),
            Severity::Major => style(prefix).red().to_string(),
            Severity::Critical => style(prefix).red().bold().to_string(),
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            for diag in &report.diagnostics {
                // Header line: severity[rule-id]: message
                writeln!(
                    writer,
                    "{}[{}]: {}",
                    self.severity_prefix(diag.severity),
                    diag.rule,
                    diag.message
                )?;
                writeln!(writer, "  --> {}", report.path)?;
                writeln!(writer)?;
            }

            for failure in &report.failures {
                writeln!(
                    writer,
                    "error[{}]: rule failed: {}",
                    failure.rule, failure.message
                )?;
                writeln!(writer, "  --> {}", report.path)?;
                writeln!(writer)?;
            }
        }

        // Summary
        let mut counts = [0usize; 3];
        for report in reports {
            for diag in &report.diagnostics {
                match diag.severity {
                    Severity::Minor => counts[0] += 1,
                    Severity::Major => counts[1] += 1,
                    Severity::Critical => counts[2] += 1,
                }
            }
        }

        if counts.iter().any(|&c| c > 0) {
            writeln!(
                writer,
                "Found {} critical, {} major, and {} minor issue(s)",
                counts[2], counts[1], counts[0]
            )?;
        }

        Ok(())
    }
}
