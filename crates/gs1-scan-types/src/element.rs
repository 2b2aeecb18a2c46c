//! Decoded and skipped pieces of an element string

use crate::ApplicationIdentifier;
use gs1_scan_diagnostics::Span;
use serde::{Deserialize, Serialize};

/// One decoded AI/value pair, located in the scanned input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub ai: ApplicationIdentifier,
    /// Normalized value as stored in the record
    pub value: String,
    /// Bytes covering the AI and its value
    pub span: Span,
}

/// Why a piece of the input did not reach the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The AI is not one of the supported identifiers
    UnknownIdentifier,
    /// A fixed-length value was cut short
    Truncated,
    /// The YYMMDD value is not six digits
    InvalidDate,
}

/// A piece of the input that was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredElement {
    /// The AI code, when the notation made it explicit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub reason: IgnoreReason,
    pub span: Span,
}
