//! GS1 barcode decoding for pharmaceutical packaging
//!
//! This crate bundles the GS1 scan workspace:
//! - decoding scanned element strings into medication records
//! - locating each decoded field in the scanned text
//! - opt-in checks on decoded records (check digit, dates, field lengths)
//!
//! # Example
//!
//! ```
//! use gs1_scan::parse;
//!
//! let code = parse("(01)07898987654321(17)251231(10)L123(21)ABC");
//! assert!(code.is_gs1());
//! assert_eq!(code.expiry.as_deref(), Some("2025-12-31"));
//! ```

// Re-export all public APIs from internal crates
pub use gs1_scan_check as check;
pub use gs1_scan_diagnostics as diagnostics;
pub use gs1_scan_parser as parser;
pub use gs1_scan_types as types;

// Convenience re-exports
pub use gs1_scan_diagnostics::{Diagnostic, Result, ScanError};
pub use gs1_scan_parser::{Analysis, Parser, ParserOptions, analyze, parse};
pub use gs1_scan_types::{ApplicationIdentifier, ParsedMedicationCode};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
