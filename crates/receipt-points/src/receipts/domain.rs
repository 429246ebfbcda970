use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored receipts. Opaque to callers; issued once at
/// submission time and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single purchased line item. Price stays a decimal string; scoring parses
/// it best-effort and treats unparsable values as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Receipt as submitted by the client. Immutable once stored; date, time, and
/// total keep their wire representation so scoring can apply its degrade-to-zero
/// parsing rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// "YYYY-MM-DD"
    pub purchase_date: String,
    /// "HH:MM"
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}
