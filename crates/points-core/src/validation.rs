//! # Validation Module
//!
//! Structural and format checks a receipt must pass before it is scored or
//! filed.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate(receipt)                                  │
//! │                                                                         │
//! │  1. Required   retailer, purchaseDate, purchaseTime, total, items      │
//! │  2. Retailer   ^[\w\s\-]+$                                             │
//! │  3. Date       YYYY-MM-DD, a real calendar day                         │
//! │  4. Time       HH:MM, 24-hour                                          │
//! │  5. Total      ^\d+\.\d{2}$                                            │
//! │  6. Items      each description and price, same rules as above        │
//! │                                                                         │
//! │  First failure wins. No side effects.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `\w` is the ASCII class of letters, digits and underscore. Whitespace is
//! tab, newline, form feed, carriage return and space; vertical tab is not
//! included. Accented letters are rejected.
//!
//! ## Usage
//! ```rust
//! use points_core::validation::{validate, validate_id};
//! use points_core::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     total: "9.00".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25")],
//! };
//!
//! // '&' is not allowed in a retailer name
//! assert!(validate(&receipt).is_err());
//! assert!(validate_id("abc123").is_ok());
//! ```

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use tracing::debug;

use crate::error::ValidationError;
use crate::money::money_regex;
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Patterns
// =============================================================================

fn text_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?-u:[\w\t\n\f\r \-])+$").expect("text pattern is valid")
    })
}

fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?-u:\d){4}-(?-u:\d){2}-(?-u:\d){2}$").expect("date pattern is valid")
    })
}

fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?-u:\d){2}:(?-u:\d){2}$").expect("time pattern is valid"))
}

fn id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\S+$").expect("id pattern is valid"))
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses a `YYYY-MM-DD` purchase date.
///
/// Shared with scoring so both sides agree on what a valid date is.
pub(crate) fn parse_purchase_date(s: &str) -> Option<NaiveDate> {
    if !date_regex().is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parses a 24-hour `HH:MM` purchase time.
pub(crate) fn parse_purchase_time(s: &str) -> Option<NaiveTime> {
    if !time_regex().is_match(s) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

// =============================================================================
// Receipt Validation
// =============================================================================

/// Validates a receipt.
///
/// ## Returns
/// `Ok(())`, or the first rule that failed, naming the field.
pub fn validate(receipt: &Receipt) -> ValidationResult<()> {
    let result = check_receipt(receipt);
    if let Err(ref err) = result {
        debug!(retailer = %receipt.retailer, error = %err, "Receipt rejected");
    }
    result
}

fn check_receipt(receipt: &Receipt) -> ValidationResult<()> {
    require("retailer", &receipt.retailer)?;
    require("purchaseDate", &receipt.purchase_date)?;
    require("purchaseTime", &receipt.purchase_time)?;
    require("total", &receipt.total)?;
    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    check_text("retailer", &receipt.retailer)?;

    if parse_purchase_date(&receipt.purchase_date).is_none() {
        return Err(ValidationError::InvalidDate {
            field: "purchaseDate".to_string(),
            value: receipt.purchase_date.clone(),
        });
    }

    if parse_purchase_time(&receipt.purchase_time).is_none() {
        return Err(ValidationError::InvalidTime {
            field: "purchaseTime".to_string(),
            value: receipt.purchase_time.clone(),
        });
    }

    check_money("total", &receipt.total)?;

    for (index, item) in receipt.items.iter().enumerate() {
        check_item(index, item)?;
    }

    Ok(())
}

/// Validates one item. Both fields are checked for presence before format.
fn check_item(index: usize, item: &Item) -> ValidationResult<()> {
    let description_field = format!("items[{}].shortDescription", index);
    let price_field = format!("items[{}].price", index);

    require(&description_field, &item.short_description)?;
    require(&price_field, &item.price)?;
    check_text(&description_field, &item.short_description)?;
    check_money(&price_field, &item.price)?;

    Ok(())
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn check_text(field: &str, value: &str) -> ValidationResult<()> {
    if !text_regex().is_match(value) {
        return Err(ValidationError::InvalidCharacters {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn check_money(field: &str, value: &str) -> ValidationResult<()> {
    if !money_regex().is_match(value) {
        return Err(ValidationError::InvalidMoney {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Identifier Validation
// =============================================================================

/// Validates a receipt identifier supplied by a caller for lookup.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain whitespace anywhere
///
/// ## Example
/// ```rust
/// use points_core::validation::validate_id;
///
/// assert!(validate_id("abc123").is_ok());
/// assert!(validate_id("abc 123").is_err());
/// assert!(validate_id("").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if !id_regex().is_match(id) {
        return Err(ValidationError::InvalidId(id.to_string()));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
