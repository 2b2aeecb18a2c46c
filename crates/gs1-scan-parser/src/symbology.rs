//! Input preparation: trimming, symbology identifier stripping, length bound

use crate::ParserOptions;
use gs1_scan_types::Symbology;

/// The part of a scanned input that carries the element string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prepared<'a> {
    /// Element string to decode
    pub body: &'a str,
    /// Byte offset of `body` in the original input
    pub offset: usize,
    pub symbology: Option<Symbology>,
    /// Characters past `max_input_len` were left out of `body`
    pub truncated: bool,
}

pub fn prepare<'a>(input: &'a str, options: &ParserOptions) -> Prepared<'a> {
    let mut body = input.trim();
    let mut offset = input.len() - input.trim_start().len();

    let symbology = body
        .get(..Symbology::IDENTIFIER_LEN)
        .and_then(Symbology::from_identifier);
    if symbology.is_some() {
        body = &body[Symbology::IDENTIFIER_LEN..];
        offset += Symbology::IDENTIFIER_LEN;
    }

    let (body, truncated) = match body.char_indices().nth(options.max_input_len()) {
        Some((idx, _)) => (&body[..idx], true),
        None => (body, false),
    };

    Prepared {
        body,
        offset,
        symbology,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_identifier_after_trim() {
        let prepared = prepare("  ]d2010789898765432117251231\n", &ParserOptions::default());
        assert_eq!(prepared.body, "010789898765432117251231");
        assert_eq!(prepared.offset, 5);
        assert_eq!(prepared.symbology, Some(Symbology::DataMatrix));
        assert!(!prepared.truncated);
    }

    #[test]
    fn test_unknown_identifier_is_kept() {
        let prepared = prepare("]E0123", &ParserOptions::default());
        assert_eq!(prepared.body, "]E0123");
        assert_eq!(prepared.symbology, None);
    }

    #[test]
    fn test_truncates_long_input() {
        let options = ParserOptions::new(4).unwrap();
        let prepared = prepare("]C10123456", &options);
        assert_eq!(prepared.body, "0123");
        assert!(prepared.truncated);
    }
}
