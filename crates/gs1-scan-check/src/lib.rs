//! Checks on decoded GS1 medication records
//!
//! Decoding accepts whatever the scan contained. These checks look at the
//! resulting record and report what a careful reader would question: a GTIN
//! with a wrong check digit, an expiry that is not a real date, a product past
//! its expiry, an oversized variable-length field. They never change the
//! record.

mod gtin;

pub use gtin::{check_digit, is_valid_gtin};

use chrono::NaiveDate;
use gs1_scan_diagnostics::{Diagnostic, GS0001, GS0002, GS0003, GS0004, GS0005, GS0006, Span};
use gs1_scan_parser::Analysis;
use gs1_scan_types::{ApplicationIdentifier, ParsedMedicationCode};

/// Check a record
pub fn check(code: &ParsedMedicationCode) -> Vec<Diagnostic> {
    run(code, None, |_| None)
}

/// Check a record, also reporting whether it is expired on `today`
pub fn check_on(code: &ParsedMedicationCode, today: NaiveDate) -> Vec<Diagnostic> {
    run(code, Some(today), |_| None)
}

/// Check the record inside an analysis, locating findings in the scanned input
pub fn check_analysis(analysis: &Analysis, today: Option<NaiveDate>) -> Vec<Diagnostic> {
    run(&analysis.code, today, |ai| {
        analysis
            .elements
            .iter()
            .rev()
            .find(|element| element.ai == ai)
            .map(|element| element.span)
    })
}

/// Whether any diagnostic is an error
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

fn run(
    code: &ParsedMedicationCode,
    today: Option<NaiveDate>,
    locate: impl Fn(ApplicationIdentifier) -> Option<Span>,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if !code.is_gs1() {
        diagnostics.push(Diagnostic::warning(
            GS0001,
            "no GS1 application identifier was decoded",
        ));
        return diagnostics;
    }

    if let Some(gtin) = code.gtin.as_deref() {
        if !gtin.bytes().all(|b| b.is_ascii_digit()) {
            diagnostics.push(finding(
                Diagnostic::error(GS0002, format!("GTIN '{}' contains non-digit characters", gtin)),
                ApplicationIdentifier::Gtin,
                &locate,
            ));
        } else if !is_valid_gtin(gtin) {
            let expected = check_digit(&gtin[..gtin.len() - 1]).unwrap_or_default();
            diagnostics.push(finding(
                Diagnostic::error(
                    GS0003,
                    format!("GTIN '{}' has check digit {}, expected {}", gtin, &gtin[gtin.len() - 1..], expected),
                ),
                ApplicationIdentifier::Gtin,
                &locate,
            ));
        }
    }

    if let Some(expiry) = code.expiry.as_deref() {
        match code.expiry_date() {
            None => diagnostics.push(finding(
                Diagnostic::error(GS0004, format!("expiry '{}' is not a calendar date", expiry)),
                ApplicationIdentifier::Expiry,
                &locate,
            )),
            Some(date) => {
                if let Some(today) = today.filter(|today| *today > date) {
                    diagnostics.push(finding(
                        Diagnostic::warning(
                            GS0005,
                            format!("expired on {}, {} day(s) ago", date, (today - date).num_days()),
                        ),
                        ApplicationIdentifier::Expiry,
                        &locate,
                    ));
                }
            }
        }
    }

    for ai in [ApplicationIdentifier::Lot, ApplicationIdentifier::Serial, ApplicationIdentifier::Anvisa] {
        let Some(value) = code.get(ai) else {
            continue;
        };
        let len = value.chars().count();
        if len > ai.max_length() {
            diagnostics.push(finding(
                Diagnostic::warning(
                    GS0006,
                    format!("{} is {} characters long, GS1 allows {}", ai.field_name(), len, ai.max_length()),
                ),
                ai,
                &locate,
            ));
        }
    }

    diagnostics
}

fn finding(
    diagnostic: Diagnostic,
    ai: ApplicationIdentifier,
    locate: &impl Fn(ApplicationIdentifier) -> Option<Span>,
) -> Diagnostic {
    let diagnostic = diagnostic.with_field(ai.field_name());
    match locate(ai) {
        Some(span) => diagnostic.with_span(span),
        None => diagnostic,
    }
}
