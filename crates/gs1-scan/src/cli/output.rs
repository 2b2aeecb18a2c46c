//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use gs1_scan_parser::Analysis;
use gs1_scan_types::ParsedMedicationCode;
use serde::Serialize;
use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One compact JSON document per line
    #[default]
    Json,
    /// A single pretty-printed JSON array
    JsonPretty,
    Table,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" | "json-pretty" => Self::JsonPretty,
            "table" => Self::Table,
            _ => Self::Json,
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Serialize items as JSON lines or as one pretty array
pub fn format_json<T: Serialize>(items: &[T], pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(items).context("Failed to serialize JSON")
    } else {
        let lines = items
            .iter()
            .map(serde_json::to_string)
            .collect::<serde_json::Result<Vec<_>>>()
            .context("Failed to serialize JSON")?;
        Ok(lines.join("\n"))
    }
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "GTIN")]
    gtin: String,
    #[tabled(rename = "Expiry")]
    expiry: String,
    #[tabled(rename = "Lot")]
    lot: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "ANVISA")]
    anvisa: String,
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// One row per decoded record
pub fn records_table(codes: &[ParsedMedicationCode]) -> String {
    let rows = codes.iter().map(|code| RecordRow {
        gtin: cell(&code.gtin),
        expiry: cell(&code.expiry),
        lot: cell(&code.lot),
        serial: cell(&code.serial),
        anvisa: cell(&code.anvisa),
    });
    Table::new(rows).with(Style::modern()).to_string()
}

#[derive(Tabled)]
struct ElementRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "AI")]
    ai: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Bytes")]
    span: String,
}

/// One row per decoded or skipped element
pub fn analysis_table(analyses: &[Analysis]) -> String {
    let mut rows = Vec::new();
    for (i, analysis) in analyses.iter().enumerate() {
        for element in &analysis.elements {
            rows.push(ElementRow {
                index: i + 1,
                ai: element.ai.to_string(),
                value: element.value.clone(),
                span: element.span.to_string(),
            });
        }
        for skipped in &analysis.ignored {
            rows.push(ElementRow {
                index: i + 1,
                ai: skipped
                    .code
                    .as_deref()
                    .map(|c| format!("({})", c))
                    .unwrap_or_else(|| "?".to_string()),
                value: format!("skipped: {:?}", skipped.reason),
                span: skipped.span.to_string(),
            });
        }
    }
    Table::new(rows).with(Style::modern()).to_string()
}
