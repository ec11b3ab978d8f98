//! The synthetic customer record.

use crate::mask::{mask_card, mask_rrn};
use serde::{Deserialize, Serialize};

/// A single synthetic customer row.
///
/// Field order matches the CSV column order; the `csv` crate derives the
/// header row from these field names when serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Sequential identifier, `CUST-0001` onwards.
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Resident-registration-number-shaped string. Synthetic only.
    pub rrn_like: String,
    /// Dashed, Luhn-valid card-shaped string. Synthetic only.
    pub credit_card_like: String,
    pub address: String,
    pub memo: String,
}

impl CustomerRecord {
    /// Derive the masked variant of this record.
    ///
    /// `rrn_like` and `credit_card_like` are partially redacted; all other
    /// fields are copied unchanged. The original record is never mutated.
    pub fn masked(&self) -> CustomerRecord {
        CustomerRecord {
            rrn_like: mask_rrn(&self.rrn_like),
            credit_card_like: mask_card(&self.credit_card_like),
            ..self.clone()
        }
    }
}
