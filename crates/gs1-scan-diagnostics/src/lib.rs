//! GS1 scan diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the GS1
//! decoding crates: error codes, byte spans into the scanned input, and
//! diagnostic reporting. Decoding itself never fails; errors here belong to
//! configuration, I/O and the opt-in record checks.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for GS1 scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
