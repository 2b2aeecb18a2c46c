//! GS1 scan error types

use crate::{ErrorCode, Span, GS0100, GS0200, GS0201};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - the decoded record should not be trusted
    Error,
    /// Warning - suspicious but usable
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message about a decoded record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Output field the diagnostic is about (`gtin`, `expiry`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Location in the scanned input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Additional context or help
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    fn with_severity(severity: Severity, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field: None,
            span: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    /// Set the field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Check if this diagnostic is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let level = match self.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        let mut out = format!("{}[{}]: {}", level, self.code, self.message);
        if let Some(field) = &self.field {
            out.push_str(&format!(" ({})", field.cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " [{}]", field)?;
        }
        if let Some(span) = &self.span {
            write!(f, " at {}", span)?;
        }
        Ok(())
    }
}

/// Main GS1 scan error type
#[derive(Debug, Error)]
pub enum ScanError {
    /// Invalid configuration value
    #[error("{code}: {message}")]
    Config { code: ErrorCode, message: String },

    /// I/O failure while reading scanned codes
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        path: Option<String>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ScanError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: GS0100,
            message: message.into(),
        }
    }

    /// Create an I/O error, optionally naming the file involved
    pub fn io(path: Option<&str>, source: std::io::Error) -> Self {
        let code = if source.kind() == std::io::ErrorKind::InvalidData {
            GS0201
        } else {
            GS0200
        };
        let message = match path {
            Some(p) => format!("failed to read {}: {}", p, source),
            None => format!("failed to read input: {}", source),
        };
        Self::System {
            code,
            message,
            path: path.map(str::to_string),
            source: Some(source),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config { code, .. } => *code,
            Self::System { code, .. } => *code,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Config { code, message } => Diagnostic::error(*code, message.clone()),
            Self::System { code, message, path, .. } => {
                let diag = Diagnostic::error(*code, message.clone());
                match path {
                    Some(p) => diag.with_help(format!("check that {} exists and is readable", p)),
                    None => diag,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GS0003;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(GS0003, "GTIN check digit mismatch")
            .with_field("gtin")
            .with_span(Span::new(0, 16));

        let text = diag.to_string();
        assert!(text.contains("GS0003"));
        assert!(text.contains("[gtin]"));
        assert!(text.contains("0..16"));
    }

    #[test]
    fn test_diagnostic_default_help() {
        let diag = Diagnostic::warning(GS0003, "mismatch");
        assert_eq!(diag.help.as_deref(), GS0003.info().help);
        assert!(!diag.is_error());
    }

    #[test]
    fn test_io_error_codes() {
        let err = ScanError::io(
            Some("codes.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.code(), GS0200);
        assert!(err.to_string().contains("codes.txt"));

        let err = ScanError::io(None, std::io::Error::new(std::io::ErrorKind::InvalidData, "bad"));
        assert_eq!(err.code(), GS0201);
    }

    #[test]
    fn test_config_error() {
        let err = ScanError::config("max_input_len must be greater than zero");
        assert_eq!(err.code(), GS0100);
        assert!(err.to_diagnostic().is_error());
    }
}
