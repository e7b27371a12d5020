//! # Identifier Module
//!
//! Content-derived receipt identifiers and duplicate detection.
//!
//! ## Fingerprint Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SHA-256 over the raw field text, no separators:                        │
//! │                                                                         │
//! │    retailer ‖ purchaseDate ‖ purchaseTime                              │
//! │      ‖ item₁.shortDescription ‖ item₁.price                            │
//! │      ‖ …                                                               │
//! │      ‖ itemₙ.shortDescription ‖ itemₙ.price                            │
//! │      ‖ total                                                           │
//! │                                                                         │
//! │  Items are taken in ascending shortDescription order, so the same      │
//! │  purchase printed in a different order yields the same identifier.    │
//! │                                                                         │
//! │  Output: 64 lowercase hex characters                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Duplicate Detection
//! [`identify`] files the receipt in the caller's [`ExpiringCache`] under its
//! fingerprint. While that entry is alive, the same receipt is rejected with
//! [`DuplicateError`]. Once it expires the fingerprint can be issued again.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::cache::{Expiration, ExpiringCache};
use crate::error::DuplicateError;
use crate::types::{Item, Receipt};

/// Computes the fingerprint of a receipt without touching any cache.
///
/// The receipt itself is left untouched; items are reordered on a
/// borrowed copy of the list.
///
/// ## Example
/// ```rust
/// use points_core::{fingerprint, Item, Receipt};
///
/// let mut receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "18.74".to_string(),
///     items: vec![
///         Item::new("Mountain Dew 12PK", "6.49"),
///         Item::new("Emils Cheese Pizza", "12.25"),
///     ],
/// };
///
/// let id = fingerprint(&receipt);
/// assert_eq!(id.len(), 64);
///
/// receipt.items.reverse();
/// assert_eq!(fingerprint(&receipt), id);
/// ```
pub fn fingerprint(receipt: &Receipt) -> String {
    let mut items: Vec<&Item> = receipt.items.iter().collect();
    // Stable: equal descriptions keep their submitted order
    items.sort_by(|a, b| a.short_description.cmp(&b.short_description));

    let mut hasher = Sha256::new();
    hasher.update(receipt.retailer.as_bytes());
    hasher.update(receipt.purchase_date.as_bytes());
    hasher.update(receipt.purchase_time.as_bytes());
    for item in items {
        hasher.update(item.short_description.as_bytes());
        hasher.update(item.price.as_bytes());
    }
    hasher.update(receipt.total.as_bytes());

    hex::encode(hasher.finalize())
}

/// Issues the identifier for a receipt and records it in `cache`.
///
/// ## Flow
/// ```text
/// fingerprint(receipt)
///      │
///      ▼
/// cache has a live entry? ──yes──► Err(DuplicateError { id })
///      │ no
///      ▼
/// cache[id] = receipt (default expiration)
///      │
///      ▼
/// Ok(id)
/// ```
///
/// Not idempotent: a second call with the same receipt fails until the
/// first entry expires. The check and the insert go through
/// [`ExpiringCache::insert_if_absent`], so concurrent identical submissions
/// cannot both succeed on a cache that implements it atomically.
pub fn identify<C>(receipt: &Receipt, cache: &C) -> Result<String, DuplicateError>
where
    C: ExpiringCache<Receipt> + ?Sized,
{
    let id = fingerprint(receipt);

    if !cache.insert_if_absent(&id, receipt.clone(), Expiration::Default) {
        debug!(id = %id, retailer = %receipt.retailer, "Duplicate receipt");
        return Err(DuplicateError { id });
    }

    debug!(id = %id, items = receipt.items.len(), "Receipt identified");
    Ok(id)
}

// =============================================================================
// Unit Tests
// =============================================================================
