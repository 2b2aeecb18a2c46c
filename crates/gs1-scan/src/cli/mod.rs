//! CLI functionality for the gs1 tool
//!
//! This module contains all CLI-related functionality including:
//! - Reading scanned codes
//! - Decoding
//! - Record checks
//! - Output formatting

pub mod check;
pub mod decode;
pub mod input;
pub mod output;
