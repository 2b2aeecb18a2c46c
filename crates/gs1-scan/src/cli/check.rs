//! Check command implementation

use super::input::InputSource;
use super::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use gs1_scan_check::{check_analysis, has_errors};
use gs1_scan_diagnostics::{Diagnostic, Severity};
use gs1_scan_parser::{Parser, ParserOptions};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for check command
pub struct CheckConfig {
    pub input: InputSource,
    pub max_len: usize,
    /// Treat warnings as failures
    pub strict: bool,
    /// Date used to decide whether products are expired
    pub today: NaiveDate,
    pub output_format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Findings for one scanned code
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub raw: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    fn fails(&self, strict: bool) -> bool {
        has_errors(&self.diagnostics)
            || (strict && self.diagnostics.iter().any(|d| d.severity == Severity::Warning))
    }
}

/// Result of a check run
#[derive(Debug)]
pub struct CheckOutcome {
    pub reports: Vec<CheckReport>,
    /// Whether every code passed
    pub passed: bool,
}

/// Decode and check scanned codes, returning whether all of them passed
pub fn check(config: CheckConfig) -> Result<bool> {
    let outcome = run(&config)?;
    let content = match config.output_format {
        OutputFormat::Json => output::format_json(&outcome.reports, false)?,
        OutputFormat::JsonPretty => output::format_json(&outcome.reports, true)?,
        OutputFormat::Table => render_text(&outcome.reports, config.strict),
    };
    output::write_output(&content, config.output_file.as_deref())?;

    if !outcome.passed && config.strict {
        eprintln!("{}", "Strict mode: treating warnings as errors".yellow());
    }
    Ok(outcome.passed)
}

/// Decode and check without printing anything
pub fn run(config: &CheckConfig) -> Result<CheckOutcome> {
    let parser = Parser::with_options(ParserOptions::new(config.max_len)?);
    let codes = config.input.read()?;
    log::debug!("checking {} code(s) as of {}", codes.len(), config.today);

    let reports: Vec<_> = codes
        .into_iter()
        .map(|raw| {
            let diagnostics = check_analysis(&parser.analyze(&raw), Some(config.today));
            CheckReport { raw, diagnostics }
        })
        .collect();
    let passed = !reports.iter().any(|r| r.fails(config.strict));

    Ok(CheckOutcome { reports, passed })
}

fn render_text(reports: &[CheckReport], strict: bool) -> String {
    let mut lines = Vec::new();
    for report in reports {
        let status = if report.fails(strict) {
            "✗".red().bold()
        } else {
            "✓".green().bold()
        };
        lines.push(format!("{} {}", status, report.raw.escape_debug().to_string().cyan()));
        for diagnostic in &report.diagnostics {
            lines.push(format!("  {}", diagnostic.render_colored()));
        }
    }
    lines.join("\n")
}
