//! # Domain Types
//!
//! The receipt shape accepted by Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      Receipt        │  1..n    │        Item         │              │
//! │  │  ─────────────────  │─────────►│  ─────────────────  │              │
//! │  │  retailer           │          │  shortDescription   │              │
//! │  │  purchaseDate       │          │  price  ("6.49")    │              │
//! │  │  purchaseTime       │          └─────────────────────┘              │
//! │  │  total   ("35.35")  │                                               │
//! │  └─────────────────────┘          ┌─────────────────────┐              │
//! │                                   │  ProcessedReceipt   │              │
//! │                                   │  id + points        │              │
//! │                                   └─────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Strings?
//! Every field is kept exactly as submitted. Money stays a string until a rule
//! needs it as a number (see [`crate::money::Money::parse`]), and the
//! fingerprint hashes the submitted text, not a reformatted value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Short product description, e.g. "Mountain Dew 12PK".
    pub short_description: String,

    /// Price as written on the receipt, e.g. "6.49".
    pub price: String,
}

impl Item {
    /// Convenience constructor.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt submitted for points.
///
/// ## JSON Shape
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "6.49"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Store name.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Total amount paid, e.g. "35.35".
    pub total: String,

    /// Purchased items, in the order they were printed.
    #[serde(default)]
    pub items: Vec<Item>,
}

// =============================================================================
// Processed Receipt
// =============================================================================

/// The outcome of accepting a receipt: where it is filed and what it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessedReceipt {
    /// Content-derived identifier (64 lowercase hex characters).
    pub id: String,

    /// Points awarded.
    pub points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
