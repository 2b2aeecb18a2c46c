//! Value normalization shared by both notations

use crate::date::format_expiry;
use gs1_scan_types::{ApplicationIdentifier, IgnoreReason};

/// Split `s` after its first `n` characters, or `None` if it is shorter
pub fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    match s.char_indices().nth(n) {
        Some((idx, _)) => Some(s.split_at(idx)),
        None if s.chars().count() == n => Some((s, "")),
        None => None,
    }
}

/// Turn the text following an AI into the value stored in the record.
///
/// Fixed-length AIs keep exactly their length from the start of `text`;
/// variable-length AIs keep all of it, trimmed, even when nothing is left.
pub fn normalize(ai: ApplicationIdentifier, text: &str) -> Result<String, IgnoreReason> {
    match ai.fixed_length() {
        Some(len) => {
            let (value, _) = split_chars(text, len).ok_or(IgnoreReason::Truncated)?;
            match ai {
                ApplicationIdentifier::Expiry => format_expiry(value).ok_or(IgnoreReason::InvalidDate),
                _ => Ok(value.to_string()),
            }
        }
        None => Ok(text.trim().to_string()),
    }
}
