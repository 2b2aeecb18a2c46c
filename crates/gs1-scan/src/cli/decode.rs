//! Decode command implementation

use super::input::InputSource;
use super::output::{self, OutputFormat};
use anyhow::Result;
use gs1_scan_parser::{Parser, ParserOptions};
use std::path::PathBuf;

/// Configuration for decode command
pub struct DecodeConfig {
    pub input: InputSource,
    pub max_len: usize,
    /// Report element locations and skipped pieces
    pub details: bool,
    pub output_format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Decode scanned codes and print the records
pub fn decode(config: DecodeConfig) -> Result<()> {
    let content = render(&config)?;
    output::write_output(&content, config.output_file.as_deref())
}

/// Decode scanned codes and render them in the configured format
pub fn render(config: &DecodeConfig) -> Result<String> {
    let parser = Parser::with_options(ParserOptions::new(config.max_len)?);
    let codes = config.input.read()?;
    log::debug!("decoding {} code(s)", codes.len());

    if config.details {
        let analyses: Vec<_> = codes.iter().map(|c| parser.analyze(c)).collect();
        return match config.output_format {
            OutputFormat::Table => Ok(output::analysis_table(&analyses)),
            OutputFormat::Json => output::format_json(&analyses, false),
            OutputFormat::JsonPretty => output::format_json(&analyses, true),
        };
    }

    let records: Vec<_> = codes.iter().map(|c| parser.parse(c)).collect();
    let unrecognized = records.iter().filter(|r| !r.is_gs1()).count();
    if unrecognized > 0 {
        log::warn!("{} of {} code(s) contained no GS1 data", unrecognized, records.len());
    }

    match config.output_format {
        OutputFormat::Table => Ok(output::records_table(&records)),
        OutputFormat::Json => output::format_json(&records, false),
        OutputFormat::JsonPretty => output::format_json(&records, true),
    }
}
