//! GS1 application identifiers understood by the decoder

use serde::{Deserialize, Serialize};
use std::fmt;

/// An application identifier relevant to pharmaceutical traceability.
///
/// Every other GS1 AI is ignored by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApplicationIdentifier {
    /// AI 01, Global Trade Item Number
    #[serde(rename = "01")]
    Gtin,
    /// AI 17, expiration date (YYMMDD)
    #[serde(rename = "17")]
    Expiry,
    /// AI 10, batch or lot number
    #[serde(rename = "10")]
    Lot,
    /// AI 21, serial number
    #[serde(rename = "21")]
    Serial,
    /// AI 713, Brazilian ANVISA registration number
    #[serde(rename = "713")]
    Anvisa,
}

impl ApplicationIdentifier {
    /// All supported identifiers, in output field order
    pub const ALL: [Self; 5] = [Self::Gtin, Self::Expiry, Self::Lot, Self::Serial, Self::Anvisa];

    /// Order in which AI prefixes are tried against unbracketed data.
    ///
    /// Longer codes come before shorter ones, and fixed-length AIs before
    /// variable-length ones.
    pub const PREFIX_ORDER: [Self; 5] = [Self::Anvisa, Self::Gtin, Self::Expiry, Self::Lot, Self::Serial];

    /// The numeric AI code
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gtin => "01",
            Self::Expiry => "17",
            Self::Lot => "10",
            Self::Serial => "21",
            Self::Anvisa => "713",
        }
    }

    /// Name of the output field this AI populates
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Gtin => "gtin",
            Self::Expiry => "expiry",
            Self::Lot => "lot",
            Self::Serial => "serial",
            Self::Anvisa => "anvisa",
        }
    }

    /// Length of the value for fixed-length AIs
    pub const fn fixed_length(self) -> Option<usize> {
        match self {
            Self::Gtin => Some(14),
            Self::Expiry => Some(6),
            Self::Lot | Self::Serial | Self::Anvisa => None,
        }
    }

    /// Maximum value length allowed by the GS1 general specifications
    pub const fn max_length(self) -> usize {
        match self.fixed_length() {
            Some(len) => len,
            None => 20,
        }
    }

    /// Look up an identifier by its exact code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ai| ai.code() == code)
    }

    /// Find the identifier whose code prefixes `data`, trying [`Self::PREFIX_ORDER`]
    pub fn match_prefix(data: &str) -> Option<Self> {
        Self::PREFIX_ORDER
            .into_iter()
            .find(|ai| data.starts_with(ai.code()))
    }
}

impl fmt::Display for ApplicationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ApplicationIdentifier::from_code("01"), Some(ApplicationIdentifier::Gtin));
        assert_eq!(ApplicationIdentifier::from_code("713"), Some(ApplicationIdentifier::Anvisa));
        assert_eq!(ApplicationIdentifier::from_code("71"), None);
        assert_eq!(ApplicationIdentifier::from_code("11"), None);
    }

    #[test]
    fn test_match_prefix_prefers_longer_codes() {
        assert_eq!(
            ApplicationIdentifier::match_prefix("7131234567890"),
            Some(ApplicationIdentifier::Anvisa)
        );
        assert_eq!(ApplicationIdentifier::match_prefix("71"), None);
        assert_eq!(
            ApplicationIdentifier::match_prefix("1725123110ABC"),
            Some(ApplicationIdentifier::Expiry)
        );
        assert_eq!(ApplicationIdentifier::match_prefix("30100"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ApplicationIdentifier::Gtin.to_string(), "(01)");
        assert_eq!(ApplicationIdentifier::Anvisa.to_string(), "(713)");
    }
}
