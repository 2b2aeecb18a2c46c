//! Raw scanner output: fields run together, variable-length fields closed by
//! the group separator

use crate::ElementSink;
use crate::value::{normalize, split_chars};
use gs1_scan_diagnostics::Span;
use gs1_scan_types::{ApplicationIdentifier, IgnoreReason};

/// ASCII Group Separator, the transmitted form of FNC1
pub const GROUP_SEPARATOR: char = '\u{1d}';

/// Decode each GS-delimited chunk of `body`
pub fn decode(body: &str, offset: usize, sink: &mut impl ElementSink) {
    let mut start = offset;
    for chunk in body.split(GROUP_SEPARATOR) {
        consume_chunk(chunk, start, sink);
        start += chunk.len() + GROUP_SEPARATOR.len_utf8();
    }
}

/// Decode one chunk starting at byte `offset` of the original input.
///
/// A fixed-length field may be followed directly by another field; whatever
/// is left after it is decoded as a chunk of its own. A variable-length field
/// takes the rest of the chunk.
fn consume_chunk(chunk: &str, offset: usize, sink: &mut impl ElementSink) {
    if chunk.is_empty() {
        return;
    }
    let chunk_span = Span::new(offset, offset + chunk.len());

    let Some(ai) = ApplicationIdentifier::match_prefix(chunk) else {
        sink.unknown(None, chunk_span);
        return;
    };
    let code_len = ai.code().len();
    let data = &chunk[code_len..];

    let Some(len) = ai.fixed_length() else {
        match normalize(ai, data) {
            Ok(value) => sink.element(ai, value, chunk_span),
            Err(reason) => sink.rejected(ai, reason, chunk_span),
        }
        return;
    };

    let Some((text, rest)) = split_chars(data, len) else {
        sink.rejected(ai, IgnoreReason::Truncated, chunk_span);
        return;
    };
    let end = offset + code_len + text.len();
    match normalize(ai, text) {
        Ok(value) => sink.element(ai, value, Span::new(offset, end)),
        Err(reason) => sink.rejected(ai, reason, Span::new(offset, end)),
    }
    consume_chunk(rest, end, sink);
}
