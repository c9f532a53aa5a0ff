//! Lint command implementation.
//!
//! Drives a full lint run: discover compose files, parse each into its
//! paired structural/textual form, evaluate the enabled rules, render the
//! collected reports, and optionally apply auto-fixes in place.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::load_settings;
use crate::discovery::discover_files;
use crate::document::{load_document, parse_document};
use crate::error::{ComposelintError, Result};
use crate::lint::{
    FileReport, HumanFormatter, JsonFormatter, LintEngine, LintFormatter, LintRule, RuleRegistry,
    SarifFormatter, SchemaGenerator, Severity,
};

/// Outcome of a command, for exit-code reporting.
#[derive(Debug, Clone, Copy)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,
    /// Process exit code to report.
    pub exit_code: i32,
}

impl CommandResult {
    /// A successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// A failed result with the given exit code.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The lint command implementation.
pub struct LintCommand {
    args: Cli,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(args: Cli) -> Self {
        Self { args }
    }

    /// Run the lint pass.
    pub fn execute(&self) -> Result<CommandResult> {
        if self.args.schema {
            let schema = SchemaGenerator::new().generate();
            println!(
                "{}",
                serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?
            );
            return Ok(CommandResult::success());
        }

        let cwd = std::env::current_dir()?;
        let settings = load_settings(&cwd, self.args.config.as_deref())?;

        let format = self
            .args
            .format
            .clone()
            .or_else(|| settings.format.clone())
            .unwrap_or_else(|| "human".to_string());
        if !matches!(format.as_str(), "human" | "json" | "sarif") {
            return Err(ComposelintError::UnknownFormat { name: format });
        }
        let strict = self.args.strict || settings.strict;

        let search: Vec<PathBuf> = if self.args.paths.is_empty() {
            vec![cwd]
        } else {
            self.args.paths.clone()
        };
        let files = discover_files(&search)?;
        tracing::debug!("linting {} file(s)", files.len());

        let registry = RuleRegistry::with_builtins();
        let rules: Vec<&dyn LintRule> = registry
            .iter()
            .filter(|rule| settings.is_enabled(rule.id().as_str()))
            .collect();
        let engine = LintEngine::new();

        let mut reports = Vec::new();
        let mut parse_failed = false;

        for file in &files {
            let context = match load_document(file) {
                Ok(context) => context,
                Err(e) => {
                    // One unparseable file fails the run but never aborts it.
                    parse_failed = true;
                    eprintln!("{}", e);
                    continue;
                }
            };

            let mut outcome = engine.evaluate(&context, &rules);

            if self.args.fix {
                let fixed = engine.apply_fixes(&context.source_code, &rules);
                if fixed.text != context.source_code {
                    fs::write(file, &fixed.text)?;
                    tracing::info!("rewrote {}", file.display());
                    match parse_document(context.path.clone(), &fixed.text) {
                        Ok(fixed_context) => outcome = engine.evaluate(&fixed_context, &rules),
                        Err(e) => {
                            parse_failed = true;
                            eprintln!("{}", e);
                        }
                    }
                }
                outcome.failures.extend(fixed.failures);
            }

            reports.push(FileReport {
                path: context.path,
                diagnostics: outcome.diagnostics,
                failures: outcome.failures,
            });
        }

        let clean = reports.iter().all(FileReport::is_clean);
        if format == "human" && clean {
            if !self.args.quiet && !parse_failed {
                println!("No issues found in {} file(s)", reports.len());
            }
        } else {
            print!("{}", self.format_output(&format, &reports)?);
        }

        let threshold = if strict {
            Severity::Minor
        } else {
            Severity::Major
        };
        let over_threshold = reports
            .iter()
            .flat_map(|r| r.diagnostics.iter())
            .any(|d| d.severity >= threshold);
        let rule_faulted = reports.iter().any(|r| !r.failures.is_empty());

        if parse_failed {
            Ok(CommandResult::failure(2))
        } else if over_threshold || rule_faulted {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }

    /// Format reports using the appropriate formatter.
    fn format_output(&self, format: &str, reports: &[FileReport]) -> Result<String> {
        let mut output = Vec::new();

        match format {
            "json" => {
                let formatter = JsonFormatter::new();
                formatter.format(reports, &mut output)?;
            }
            "sarif" => {
                let formatter = SarifFormatter::new("composelint", env!("CARGO_PKG_VERSION"));
                formatter.format(reports, &mut output)?;
            }
            _ => {
                let formatter = HumanFormatter::new(!self.args.no_color);
                formatter.format(reports, &mut output)?;
            }
        }

        Ok(String::from_utf8(output).map_err(anyhow::Error::from)?)
    }
}
