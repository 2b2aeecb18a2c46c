//! GS1 element string decoder
//!
//! Turns the text a barcode scanner produced from a GS1-128, GS1 DataMatrix or
//! GS1 QR symbol into a [`ParsedMedicationCode`]. Two notations are accepted:
//!
//! - bracketed, `(01)07898987654321(17)251231(10)L123`, used when codes are
//!   typed in or printed as human-readable text
//! - concatenated, the raw scanner stream, where variable-length fields are
//!   closed by the ASCII group separator (`0x1D`)
//!
//! Decoding never fails. Input that is not a GS1 element string produces a
//! record with only `raw` set; see [`ParsedMedicationCode::is_gs1`].
//!
//! # Example
//!
//! ```
//! use gs1_scan_parser::parse;
//!
//! let code = parse("]C1010789898765432117251231\u{1d}10L123");
//! assert_eq!(code.gtin.as_deref(), Some("07898987654321"));
//! assert_eq!(code.expiry.as_deref(), Some("2025-12-31"));
//! assert_eq!(code.lot.as_deref(), Some("L123"));
//! ```

mod bracketed;
mod concatenated;
mod date;
mod symbology;
mod value;

pub use concatenated::GROUP_SEPARATOR;
pub use date::{expand_year, format_expiry};

use gs1_scan_diagnostics::{Result, ScanError, Span};
use gs1_scan_types::{
    ApplicationIdentifier, Element, Encoding, IgnoreReason, IgnoredElement, ParsedMedicationCode,
    Symbology,
};
use serde::Serialize;

/// Receives what the notation decoders find
pub(crate) trait ElementSink {
    fn element(&mut self, ai: ApplicationIdentifier, value: String, span: Span);
    /// A supported AI whose value could not be stored. It still replaces any
    /// earlier value for the same AI.
    fn rejected(&mut self, ai: ApplicationIdentifier, reason: IgnoreReason, span: Span);
    /// Text that does not start with a supported AI
    fn unknown(&mut self, code: Option<&str>, span: Span);
}

impl ElementSink for ParsedMedicationCode {
    fn element(&mut self, ai: ApplicationIdentifier, value: String, _span: Span) {
        self.set(ai, value);
    }

    fn rejected(&mut self, ai: ApplicationIdentifier, _reason: IgnoreReason, _span: Span) {
        self.clear(ai);
    }

    fn unknown(&mut self, _code: Option<&str>, _span: Span) {}
}

/// Decoder options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParserOptions {
    max_input_len: usize,
}

impl ParserOptions {
    /// Real element strings are far shorter than this
    pub const DEFAULT_MAX_INPUT_LEN: usize = 512;

    /// Create options decoding at most `max_input_len` characters of the
    /// element string
    pub fn new(max_input_len: usize) -> Result<Self> {
        if max_input_len == 0 {
            return Err(ScanError::config("max_input_len must be greater than zero"));
        }
        Ok(Self { max_input_len })
    }

    /// Characters of the element string that are decoded; the rest is ignored
    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// Detailed decoding result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The record [`parse`] returns for the same input
    pub code: ParsedMedicationCode,
    /// Carrier named by the symbology identifier, if one was present
    pub symbology: Option<Symbology>,
    pub encoding: Encoding,
    /// Decoded elements in input order, including ones later overwritten
    pub elements: Vec<Element>,
    pub ignored: Vec<IgnoredElement>,
    /// The element string was longer than `max_input_len`
    pub truncated: bool,
}

impl ElementSink for Analysis {
    fn element(&mut self, ai: ApplicationIdentifier, value: String, span: Span) {
        self.code.set(ai, value.clone());
        self.elements.push(Element { ai, value, span });
    }

    fn rejected(&mut self, ai: ApplicationIdentifier, reason: IgnoreReason, span: Span) {
        self.code.clear(ai);
        self.ignored.push(IgnoredElement {
            code: Some(ai.code().to_string()),
            reason,
            span,
        });
    }

    fn unknown(&mut self, code: Option<&str>, span: Span) {
        self.ignored.push(IgnoredElement {
            code: code.map(str::to_string),
            reason: IgnoreReason::UnknownIdentifier,
            span,
        });
    }
}

/// A decoder with fixed options
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Decode a scanned string
    pub fn parse(&self, input: &str) -> ParsedMedicationCode {
        parse_with(input, &self.options)
    }

    /// Decode a scanned string, reporting where each field came from
    pub fn analyze(&self, input: &str) -> Analysis {
        analyze_with(input, &self.options)
    }
}

/// Decode a scanned string with default options
pub fn parse(input: &str) -> ParsedMedicationCode {
    parse_with(input, &ParserOptions::default())
}

/// Decode a scanned string.
///
/// Always returns a record; `raw` holds `input` unchanged.
pub fn parse_with(input: &str, options: &ParserOptions) -> ParsedMedicationCode {
    let prepared = symbology::prepare(input, options);
    let mut code = ParsedMedicationCode::new(input);
    decode(prepared.body, prepared.offset, &mut code);
    code
}

/// Decode a scanned string with default options, keeping element details
pub fn analyze(input: &str) -> Analysis {
    analyze_with(input, &ParserOptions::default())
}

/// Decode a scanned string, keeping element details.
///
/// `analysis.code` is identical to what [`parse_with`] returns.
pub fn analyze_with(input: &str, options: &ParserOptions) -> Analysis {
    let prepared = symbology::prepare(input, options);
    let mut analysis = Analysis {
        code: ParsedMedicationCode::new(input),
        symbology: prepared.symbology,
        encoding: encoding_of(prepared.body),
        elements: Vec::new(),
        ignored: Vec::new(),
        truncated: prepared.truncated,
    };
    decode(prepared.body, prepared.offset, &mut analysis);

    if analysis.truncated {
        log::debug!(
            "element string exceeds {} characters, decoded a prefix only",
            options.max_input_len()
        );
    }
    for skipped in &analysis.ignored {
        log::trace!(
            "skipped {} at {} ({:?})",
            skipped.code.as_deref().unwrap_or("chunk"),
            skipped.span,
            skipped.reason
        );
    }
    log::debug!(
        "decoded {} element(s) from {:?} input, {} skipped",
        analysis.elements.len(),
        analysis.encoding,
        analysis.ignored.len()
    );

    analysis
}

fn encoding_of(body: &str) -> Encoding {
    if body.contains('(') {
        Encoding::Bracketed
    } else {
        Encoding::Concatenated
    }
}

fn decode(body: &str, offset: usize, sink: &mut impl ElementSink) {
    match encoding_of(body) {
        Encoding::Bracketed => bracketed::decode(body, offset, sink),
        Encoding::Concatenated => concatenated::decode(body, offset, sink),
    }
}
