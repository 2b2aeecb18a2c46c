//! Tests for the decoded medication record

use chrono::NaiveDate;
use gs1_scan_types::{ApplicationIdentifier, ParsedMedicationCode};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn with_expiry(expiry: &str) -> ParsedMedicationCode {
    let mut code = ParsedMedicationCode::new("");
    code.set(ApplicationIdentifier::Expiry, expiry);
    code
}

#[test]
fn test_new_has_only_raw() {
    let code = ParsedMedicationCode::new("not a barcode at all");
    assert_eq!(code.raw, "not a barcode at all");
    assert!(!code.is_gs1());
    assert_eq!(code.fields().count(), 0);
}

#[rstest]
#[case(ApplicationIdentifier::Gtin, "07898987654321")]
#[case(ApplicationIdentifier::Expiry, "2025-12-31")]
#[case(ApplicationIdentifier::Lot, "L123")]
#[case(ApplicationIdentifier::Serial, "ABC")]
#[case(ApplicationIdentifier::Anvisa, "1234567890123")]
fn test_any_field_makes_gs1(#[case] ai: ApplicationIdentifier, #[case] value: &str) {
    let mut code = ParsedMedicationCode::new("x");
    code.set(ai, value);
    assert!(code.is_gs1());
    assert_eq!(code.get(ai), Some(value));
}

#[test]
fn test_set_overwrites() {
    let mut code = ParsedMedicationCode::new("");
    code.set(ApplicationIdentifier::Lot, "ABC");
    code.set(ApplicationIdentifier::Lot, "XYZ");
    assert_eq!(code.lot.as_deref(), Some("XYZ"));
}

#[test]
fn test_clear() {
    let mut code = ParsedMedicationCode::new("");
    code.set(ApplicationIdentifier::Serial, "S1");
    assert_eq!(code.clear(ApplicationIdentifier::Serial).as_deref(), Some("S1"));
    assert_eq!(code.clear(ApplicationIdentifier::Serial), None);
    assert!(!code.is_gs1());
}

#[test]
fn test_blank_value_counts_as_present() {
    let mut code = ParsedMedicationCode::new("10");
    code.set(ApplicationIdentifier::Lot, "");
    assert!(code.is_gs1());
}

#[test]
fn test_fields_in_output_order() {
    let mut code = ParsedMedicationCode::new("");
    code.set(ApplicationIdentifier::Serial, "S1");
    code.set(ApplicationIdentifier::Gtin, "07898987654321");
    let fields: Vec<_> = code.fields().collect();
    assert_eq!(
        fields,
        vec![
            (ApplicationIdentifier::Gtin, "07898987654321"),
            (ApplicationIdentifier::Serial, "S1"),
        ]
    );
}

#[rstest]
#[case("2025-12-31", Some((2025, 12, 31)))]
#[case("2024-02-00", Some((2024, 2, 29)))]
#[case("2025-02-00", Some((2025, 2, 28)))]
#[case("2025-12-00", Some((2025, 12, 31)))]
#[case("2025-02-30", None)]
#[case("2025-13-01", None)]
fn test_expiry_date(#[case] expiry: &str, #[case] expected: Option<(i32, u32, u32)>) {
    let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
    assert_eq!(with_expiry(expiry).expiry_date(), expected);
}

#[test]
fn test_expiry_date_missing() {
    assert_eq!(ParsedMedicationCode::new("").expiry_date(), None);
}

#[test]
fn test_is_expired_on() {
    let code = with_expiry("2025-12-31");
    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    assert_eq!(code.is_expired_on(day(2025, 12, 30)), Some(false));
    assert_eq!(code.is_expired_on(day(2025, 12, 31)), Some(false));
    assert_eq!(code.is_expired_on(day(2026, 1, 1)), Some(true));
    assert_eq!(ParsedMedicationCode::new("").is_expired_on(day(2026, 1, 1)), None);
}

#[test]
fn test_serialized_field_names() {
    let mut code = ParsedMedicationCode::new("(01)07898987654321(17)251231");
    code.set(ApplicationIdentifier::Gtin, "07898987654321");
    code.set(ApplicationIdentifier::Expiry, "2025-12-31");

    insta::assert_json_snapshot!(code, @r#"
    {
      "gtin": "07898987654321",
      "expiry": "2025-12-31",
      "raw": "(01)07898987654321(17)251231"
    }
    "#);
}

#[test]
fn test_deserialize_missing_optionals() {
    let code: ParsedMedicationCode = serde_json::from_str(r#"{"lot":"L1","raw":"10L1"}"#).unwrap();
    assert_eq!(code.lot.as_deref(), Some("L1"));
    assert_eq!(code.gtin, None);
    assert_eq!(code.raw, "10L1");
}
