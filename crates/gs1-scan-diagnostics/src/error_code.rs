//! GS1 scan error codes following a structured numbering system
//!
//! Error code ranges:
//! - GS0001-GS0099: Record check findings (decoded data that looks wrong)
//! - GS0100-GS0199: Configuration errors
//! - GS0200-GS0299: System errors (I/O, input encoding)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a record check finding (0001-0099)
    pub const fn is_check_finding(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a configuration error (0100-0199)
    pub const fn is_config_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a system error (0200-0299)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GS{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Record check findings (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("No recognized application identifier")
            .with_help("The scan may be partial or not a GS1 barcode; rescan or enter the data manually"),
    );
    map.insert(2, ErrorInfo::new("GTIN contains non-digit characters"));
    map.insert(
        3,
        ErrorInfo::new("GTIN check digit mismatch")
            .with_help("The last digit of a GTIN-14 is a GS1 mod-10 check digit"),
    );
    map.insert(4, ErrorInfo::new("Expiry is not a calendar date"));
    map.insert(5, ErrorInfo::new("Product is expired"));
    map.insert(
        6,
        ErrorInfo::new("Field exceeds its GS1 maximum length")
            .with_help("A missing group separator can merge two variable-length fields"),
    );

    // Configuration errors (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid parser option"));

    // System errors (0200-0299)
    map.insert(200, ErrorInfo::new("I/O error"));
    map.insert(201, ErrorInfo::new("Input is not valid UTF-8"));

    map
});

// Convenient error code constants

// Record check findings
pub const GS0001: ErrorCode = ErrorCode::new(1);
pub const GS0002: ErrorCode = ErrorCode::new(2);
pub const GS0003: ErrorCode = ErrorCode::new(3);
pub const GS0004: ErrorCode = ErrorCode::new(4);
pub const GS0005: ErrorCode = ErrorCode::new(5);
pub const GS0006: ErrorCode = ErrorCode::new(6);

// Configuration errors
pub const GS0100: ErrorCode = ErrorCode::new(100);

// System errors
pub const GS0200: ErrorCode = ErrorCode::new(200);
pub const GS0201: ErrorCode = ErrorCode::new(201);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(GS0001.to_string(), "GS0001");
        assert_eq!(GS0100.to_string(), "GS0100");
        assert_eq!(GS0201.to_string(), "GS0201");
    }

    #[test]
    fn test_error_categories() {
        assert!(GS0003.is_check_finding());
        assert!(!GS0003.is_config_error());

        assert!(GS0100.is_config_error());
        assert!(GS0200.is_system_error());
        assert!(!GS0200.is_check_finding());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(GS0003.info().description, "GTIN check digit mismatch");
        assert!(GS0003.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
