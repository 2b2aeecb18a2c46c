//! Human-readable notation: `(01)07898987654321(17)251231(10)L123`

use crate::ElementSink;
use crate::value::normalize;
use gs1_scan_diagnostics::Span;
use gs1_scan_types::ApplicationIdentifier;
use regex::Regex;
use std::sync::LazyLock;

/// A parenthesized 2-4 digit AI followed by its value, which runs up to the
/// next parenthesis
static ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]{2,4})\)([^()]+)").expect("element pattern is valid"));

/// Decode every `(AI)value` pair in `body`, left to right.
///
/// A repeated AI overwrites the earlier value in the sink, and so does a
/// repeat whose value is rejected.
pub fn decode(body: &str, offset: usize, sink: &mut impl ElementSink) {
    for caps in ELEMENT.captures_iter(body) {
        let (Some(whole), Some(code), Some(text)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let span = Span::from(whole.range()).offset(offset);

        let Some(ai) = ApplicationIdentifier::from_code(code.as_str()) else {
            sink.unknown(Some(code.as_str()), span);
            continue;
        };
        match normalize(ai, text.as_str()) {
            Ok(value) => sink.element(ai, value, span),
            Err(reason) => sink.rejected(ai, reason, span),
        }
    }
}
