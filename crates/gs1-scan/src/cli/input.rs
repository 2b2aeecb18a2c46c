//! Reading scanned codes from arguments, files or stdin

use crate::{Result, ScanError};
use gs1_scan_parser::GROUP_SEPARATOR;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Textual spellings of the group separator used by scanner software and
/// people pasting codes into a terminal
const SEPARATOR_SPELLINGS: [&str; 4] = ["\\x1d", "\\x1D", "<GS>", "^]"];

/// Where codes come from
#[derive(Debug, Clone, Default)]
pub struct InputSource {
    /// Codes given on the command line
    pub codes: Vec<String>,
    /// File with one code per line
    pub file: Option<PathBuf>,
}

impl InputSource {
    /// Collect codes: command-line codes if any, otherwise lines of the file,
    /// otherwise lines of stdin. Blank lines are skipped.
    pub fn read(&self) -> Result<Vec<String>> {
        if !self.codes.is_empty() {
            return Ok(self.codes.iter().map(|c| expand_separators(c)).collect());
        }
        match &self.file {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .map_err(|e| ScanError::io(Some(&path.display().to_string()), e))?;
                Ok(collect_lines(content.lines()))
            }
            None => {
                let stdin = io::stdin();
                read_lines(stdin.lock())
            }
        }
    }
}

/// Read one code per line from a reader
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| ScanError::io(None, e))?;
    Ok(collect_lines(lines.iter().map(String::as_str)))
}

fn collect_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|line| !line.trim().is_empty())
        .map(expand_separators)
        .collect()
}

/// Replace textual group separator spellings with the real character
pub fn expand_separators(code: &str) -> String {
    let gs = GROUP_SEPARATOR.to_string();
    SEPARATOR_SPELLINGS
        .iter()
        .fold(code.to_string(), |acc, spelling| acc.replace(spelling, &gs))
}
