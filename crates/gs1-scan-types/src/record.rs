//! The decoded medication record

use crate::ApplicationIdentifier;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identity and traceability data decoded from one scanned pharmaceutical unit.
///
/// Every field except `raw` is optional; a missing field means its AI was not
/// found in the scan. Field names serialize verbatim so downstream storage can
/// keep them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ParsedMedicationCode {
    /// AI 01, exactly 14 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// AI 17 as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    /// AI 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    /// AI 21
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// AI 713
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anvisa: Option<String>,
    /// The scanned input, untouched
    pub raw: String,
}

impl ParsedMedicationCode {
    /// Create a record carrying only the raw input
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Whether any application identifier was decoded.
    ///
    /// This is how callers tell a GS1 code from any other barcode content.
    pub fn is_gs1(&self) -> bool {
        ApplicationIdentifier::ALL.into_iter().any(|ai| self.get(ai).is_some())
    }

    /// The decoded value for an AI
    pub fn get(&self, ai: ApplicationIdentifier) -> Option<&str> {
        self.slot(ai).as_deref()
    }

    /// Store a value for an AI, replacing any earlier one
    pub fn set(&mut self, ai: ApplicationIdentifier, value: impl Into<String>) {
        *self.slot_mut(ai) = Some(value.into());
    }

    /// Drop the value for an AI, returning it if there was one
    pub fn clear(&mut self, ai: ApplicationIdentifier) -> Option<String> {
        self.slot_mut(ai).take()
    }

    /// Decoded fields in output order
    pub fn fields(&self) -> impl Iterator<Item = (ApplicationIdentifier, &str)> + '_ {
        ApplicationIdentifier::ALL
            .into_iter()
            .filter_map(move |ai| self.get(ai).map(|value| (ai, value)))
    }

    /// The expiry as a calendar date.
    ///
    /// A day of `00` means the last day of the month. Returns `None` when the
    /// expiry is missing or names a day that does not exist.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        let expiry = self.expiry.as_deref()?;
        let mut parts = expiry.splitn(3, '-');
        let year: i32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;

        if day == 0 {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            first.checked_add_months(Months::new(1))?.pred_opt()
        } else {
            NaiveDate::from_ymd_opt(year, month, day)
        }
    }

    /// Whether the product is past its expiry on `today`.
    ///
    /// The expiry date itself is still usable. `None` when there is no usable
    /// expiry date.
    pub fn is_expired_on(&self, today: NaiveDate) -> Option<bool> {
        self.expiry_date().map(|expiry| today > expiry)
    }

    fn slot(&self, ai: ApplicationIdentifier) -> &Option<String> {
        match ai {
            ApplicationIdentifier::Gtin => &self.gtin,
            ApplicationIdentifier::Expiry => &self.expiry,
            ApplicationIdentifier::Lot => &self.lot,
            ApplicationIdentifier::Serial => &self.serial,
            ApplicationIdentifier::Anvisa => &self.anvisa,
        }
    }

    fn slot_mut(&mut self, ai: ApplicationIdentifier) -> &mut Option<String> {
        match ai {
            ApplicationIdentifier::Gtin => &mut self.gtin,
            ApplicationIdentifier::Expiry => &mut self.expiry,
            ApplicationIdentifier::Lot => &mut self.lot,
            ApplicationIdentifier::Serial => &mut self.serial,
            ApplicationIdentifier::Anvisa => &mut self.anvisa,
        }
    }
}
