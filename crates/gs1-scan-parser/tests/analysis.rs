//! Tests for detailed decoding results

use gs1_scan_diagnostics::Span;
use gs1_scan_parser::{ParserOptions, analyze, analyze_with, parse};
use gs1_scan_types::{ApplicationIdentifier, Encoding, IgnoreReason, Symbology};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("(01)07898987654321(17)251231(10)L123")]
#[case("]C1010789898765432117251231\u{1d}10L123")]
#[case("(10)ABC(10)XYZ")]
#[case("garbage")]
#[case("")]
fn test_analysis_code_matches_parse(#[case] input: &str) {
    assert_eq!(analyze(input).code, parse(input));
}

#[test]
fn test_concatenated_spans() {
    let input = "]C1010789898765432117251231\u{1d}10L123";
    let analysis = analyze(input);

    assert_eq!(analysis.symbology, Some(Symbology::Gs1Code128));
    assert_eq!(analysis.encoding, Encoding::Concatenated);
    assert!(!analysis.truncated);

    let located: Vec<_> = analysis
        .elements
        .iter()
        .map(|e| (e.ai, e.value.as_str(), e.span.slice(input)))
        .collect();
    assert_eq!(
        located,
        vec![
            (ApplicationIdentifier::Gtin, "07898987654321", Some("0107898987654321")),
            (ApplicationIdentifier::Expiry, "2025-12-31", Some("17251231")),
            (ApplicationIdentifier::Lot, "L123", Some("10L123")),
        ]
    );
}

#[test]
fn test_bracketed_spans_and_ignored() {
    let input = " (01)07898987654321(30)12(10)L1";
    let analysis = analyze(input);

    assert_eq!(analysis.encoding, Encoding::Bracketed);
    assert_eq!(analysis.symbology, None);
    assert_eq!(analysis.elements.len(), 2);
    assert_eq!(analysis.elements[0].span, Span::new(1, 19));
    assert_eq!(analysis.elements[1].span.slice(input), Some("(10)L1"));

    assert_eq!(analysis.ignored.len(), 1);
    let ignored = &analysis.ignored[0];
    assert_eq!(ignored.code.as_deref(), Some("30"));
    assert_eq!(ignored.reason, IgnoreReason::UnknownIdentifier);
    assert_eq!(ignored.span.slice(input), Some("(30)12"));
}

#[test]
fn test_overwritten_elements_are_listed() {
    let analysis = analyze("(10)ABC(10)XYZ");
    let lots: Vec<_> = analysis.elements.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(lots, vec!["ABC", "XYZ"]);
    assert_eq!(analysis.code.lot.as_deref(), Some("XYZ"));
}

#[rstest]
#[case("01078989", Some("01"), IgnoreReason::Truncated)]
#[case("172512AB", Some("17"), IgnoreReason::InvalidDate)]
#[case("99XYZ", None, IgnoreReason::UnknownIdentifier)]
fn test_ignore_reasons(
    #[case] input: &str,
    #[case] code: Option<&str>,
    #[case] reason: IgnoreReason,
) {
    let analysis = analyze(&format!("{input}\u{1d}21S1"));
    assert_eq!(analysis.ignored.len(), 1);
    assert_eq!(analysis.ignored[0].code.as_deref(), code);
    assert_eq!(analysis.ignored[0].reason, reason);
    assert_eq!(analysis.code.serial.as_deref(), Some("S1"));
}

#[test]
fn test_blank_lot_is_an_element() {
    let analysis = analyze("10   \u{1d}21S1");
    assert!(analysis.ignored.is_empty());
    assert_eq!(analysis.elements[0].value, "");
    assert_eq!(analysis.code.lot.as_deref(), Some(""));
}

#[test]
fn test_rejected_repeat_clears_field() {
    let analysis = analyze("(01)07898987654321(01)123");
    assert_eq!(analysis.code.gtin, None);
    assert_eq!(analysis.elements.len(), 1);
    assert_eq!(analysis.ignored[0].code.as_deref(), Some("01"));
    assert_eq!(analysis.ignored[0].reason, IgnoreReason::Truncated);
}

#[test]
fn test_truncation_reported() {
    let options = ParserOptions::new(8).unwrap();
    let analysis = analyze_with("0107898987654321", &options);
    assert!(analysis.truncated);
    assert!(analysis.elements.is_empty());
    assert_eq!(analysis.ignored[0].reason, IgnoreReason::Truncated);
}

#[test]
fn test_analysis_serializes() {
    let analysis = analyze("]d2(01)07898987654321");
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["symbology"], "data_matrix");
    assert_eq!(json["encoding"], "bracketed");
    assert_eq!(json["elements"][0]["ai"], "01");
    assert_eq!(json["code"]["gtin"], "07898987654321");
}
