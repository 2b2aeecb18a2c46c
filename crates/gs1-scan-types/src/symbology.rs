//! Barcode carriers and element string notations

use serde::{Deserialize, Serialize};
use std::fmt;

/// The GS1 carrier announced by a scanner's symbology identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    /// `]C1`, GS1-128
    Gs1Code128,
    /// `]d2`, GS1 DataMatrix
    DataMatrix,
    /// `]Q3`, GS1 QR Code
    QrCode,
}

impl Symbology {
    /// Length of a symbology identifier, including the leading `]`
    pub const IDENTIFIER_LEN: usize = 3;

    /// The canonical symbology identifier
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Gs1Code128 => "]C1",
            Self::DataMatrix => "]d2",
            Self::QrCode => "]Q3",
        }
    }

    /// Recognize a symbology identifier, ignoring the case of its letter
    pub fn from_identifier(id: &str) -> Option<Self> {
        [Self::Gs1Code128, Self::DataMatrix, Self::QrCode]
            .into_iter()
            .find(|s| s.identifier().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gs1Code128 => "GS1-128",
            Self::DataMatrix => "GS1 DataMatrix",
            Self::QrCode => "GS1 QR Code",
        };
        f.write_str(name)
    }
}

/// How the element string was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Human-readable notation with parenthesized AIs, e.g. `(01)...(17)...`
    Bracketed,
    /// Raw scanner output, fields delimited by the group separator
    #[default]
    Concatenated,
}
