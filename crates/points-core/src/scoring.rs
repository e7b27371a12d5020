//! # Scoring Module
//!
//! Computes the loyalty points a receipt earns.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                            │ Points               │
//! │──────────────────────────────────────────────────┼──────────────────────│
//! │  Retailer name, spaces removed                   │ +1 per character     │
//! │  Total ends in ".00"                             │ +50                  │
//! │  Total is a multiple of 0.25                     │ +25                  │
//! │  Every two items                                 │ +5                   │
//! │  Item whose trimmed description length % 3 == 0  │ +ceil(price × 0.2)   │
//! │  Odd day of month                                │ +6                   │
//! │  Purchase time strictly between 14:00 and 16:00  │ +10                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All rules are additive and none subtracts. Scoring is a pure function of
//! the receipt: no shared state, no lock, safe to call from any thread.
//!
//! Amounts are evaluated in integer cents (see [`crate::money`]), so the
//! quarter check and the 20% item bonus are exact. Every amount the validator
//! accepts scores; sums saturate at `u64::MAX` instead of overflowing.

use chrono::{Datelike, Timelike};
use tracing::trace;

use crate::error::ScoringError;
use crate::money::Money;
use crate::types::{Item, Receipt};
use crate::validation::{parse_purchase_date, parse_purchase_time};

/// Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

// =============================================================================
// Rule Constants
// =============================================================================

/// Bonus when the total has no cents.
pub const ROUND_DOLLAR_BONUS: u64 = 50;

/// Bonus when the total is a multiple of $0.25.
pub const QUARTER_MULTIPLE_BONUS: u64 = 25;

/// Bonus for every complete pair of items.
pub const ITEM_PAIR_BONUS: u64 = 5;

/// Item price multiplier for the description-length rule, as a fraction (0.2).
pub const ITEM_PRICE_FRACTION: (u64, u64) = (1, 5);

/// Bonus for an odd day of month.
pub const ODD_DAY_BONUS: u64 = 6;

/// Bonus for purchases in the afternoon window.
pub const AFTERNOON_BONUS: u64 = 10;

/// Afternoon window bounds, minutes after midnight (14:00 and 16:00).
pub const AFTERNOON_START: u32 = 14 * 60;
pub const AFTERNOON_END: u32 = 16 * 60;

// =============================================================================
// Breakdown
// =============================================================================

/// Points earned under each rule.
///
/// `score` returns only the sum; the breakdown exists so callers and tests
/// can see which rules fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Scoring
// =============================================================================

/// Computes the points for a receipt.
///
/// The receipt is expected to have passed [`crate::validation::validate`].
/// A field that still fails to parse is reported as a [`ScoringError`]; it
/// is never counted as zero.
///
/// ## Example
/// ```rust
/// use points_core::{score, Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     total: "9.00".to_string(),
///     items: vec![
///         Item::new("Gatorade", "2.25"),
///         Item::new("Gatorade", "2.25"),
///         Item::new("Gatorade", "2.25"),
///         Item::new("Gatorade", "2.25"),
///     ],
/// };
///
/// // 15 (name, '&' counts) + 50 + 25 + 10 (two pairs) + 10 (14:33)
/// assert_eq!(score(&receipt).unwrap(), 110);
/// ```
pub fn score(receipt: &Receipt) -> ScoringResult<u64> {
    breakdown(receipt).map(|b| b.total())
}

/// Computes the per-rule points for a receipt.
pub fn breakdown(receipt: &Receipt) -> ScoringResult<PointsBreakdown> {
    let total = Money::parse(&receipt.total)
        .map_err(|_| ScoringError::InvalidTotal(receipt.total.clone()))?;

    let points = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: if receipt.total.ends_with(".00") {
            ROUND_DOLLAR_BONUS
        } else {
            0
        },
        quarter_multiple: if total.is_quarter_multiple() {
            QUARTER_MULTIPLE_BONUS
        } else {
            0
        },
        item_pairs: (receipt.items.len() as u64 / 2) * ITEM_PAIR_BONUS,
        item_descriptions: item_description_points(&receipt.items)?,
        odd_day: odd_day_points(&receipt.purchase_date)?,
        afternoon: afternoon_points(&receipt.purchase_time)?,
    };

    trace!(
        retailer = %receipt.retailer,
        ?points,
        total = points.total(),
        "Receipt scored"
    );

    Ok(points)
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per byte of the retailer name, spaces excluded.
///
/// Only the space character is removed; every other byte counts,
/// punctuation included. Validated names are ASCII, so bytes and characters
/// agree, and the description rule below measures length the same way.
fn retailer_points(retailer: &str) -> u64 {
    retailer.bytes().filter(|b| *b != b' ').count() as u64
}

/// `ceil(price × 0.2)` for each item whose trimmed description length is a
/// multiple of three.
///
/// A price that does not parse aborts the whole calculation, even if other
/// items would have scored.
fn item_description_points(items: &[Item]) -> ScoringResult<u64> {
    let (numerator, denominator) = ITEM_PRICE_FRACTION;
    let mut points = 0u64;

    for (index, item) in items.iter().enumerate() {
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }

        let price = Money::parse(&item.price).map_err(|_| ScoringError::InvalidPrice {
            index,
            value: item.price.clone(),
        })?;

        points = points.saturating_add(price.ceil_fraction(numerator, denominator));
    }

    Ok(points)
}

fn odd_day_points(purchase_date: &str) -> ScoringResult<u64> {
    let date = parse_purchase_date(purchase_date)
        .ok_or_else(|| ScoringError::InvalidDate(purchase_date.to_string()))?;

    Ok(if date.day() % 2 == 1 { ODD_DAY_BONUS } else { 0 })
}

/// Afternoon window, exclusive on both ends: 14:00 and 16:00 do not count.
fn afternoon_points(purchase_time: &str) -> ScoringResult<u64> {
    let time = parse_purchase_time(purchase_time)
        .ok_or_else(|| ScoringError::InvalidTime(purchase_time.to_string()))?;

    let minute_of_day = time.hour() * 60 + time.minute();

    Ok(if minute_of_day > AFTERNOON_START && minute_of_day < AFTERNOON_END {
        AFTERNOON_BONUS
    } else {
        0
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// One item, no bonuses beyond the retailer name.
    fn plain_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "35.35".to_string(),
            items: vec![Item::new("Mountain Dew 12PK", "6.49")],
        }
    }

    #[test]
    fn test_plain_receipt_breakdown() {
        let points = breakdown(&plain_receipt()).unwrap();
        assert_eq!(
            points,
            PointsBreakdown {
                retailer: 6,
                ..PointsBreakdown::default()
            }
        );
        assert_eq!(score(&plain_receipt()).unwrap(), 6);
    }

    #[test]
    fn test_retailer_counts_everything_but_spaces() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 15);
        assert_eq!(retailer_points("  a b  "), 2);
        assert_eq!(retailer_points("a-b_c\td"), 7);
        assert_eq!(retailer_points(""), 0);
    }

    #[test]
    fn test_retailer_and_description_both_count_bytes() {
        // 'é' is two bytes
        assert_eq!(retailer_points("Café"), 5);

        let mut receipt = plain_receipt();
        receipt.items = vec![Item::new("Éa", "5.00")];
        assert_eq!(breakdown(&receipt).unwrap().item_descriptions, 1);
    }

    #[test]
    fn test_twenty_digit_amounts_score() {
        let mut receipt = plain_receipt();
        receipt.total = "99999999999999999999.00".to_string();
        receipt.items = vec![Item::new("Abc", "10000000000000000000.00")];

        let points = breakdown(&receipt).unwrap();
        assert_eq!(points.round_dollar, 50);
        assert_eq!(points.quarter_multiple, 25);
        assert_eq!(points.item_descriptions, 2_000_000_000_000_000_000);
        assert_eq!(points.total(), 2_000_000_000_000_000_081);
    }

    #[test]
    fn test_oversized_item_bonus_saturates() {
        let mut receipt = plain_receipt();
        receipt.items = vec![
            Item::new("Abc", "99999999999999999999.99"),
            Item::new("Def", "99999999999999999999.99"),
        ];

        let points = breakdown(&receipt).unwrap();
        assert_eq!(points.item_descriptions, u64::MAX);
        assert_eq!(score(&receipt), Ok(u64::MAX));
    }

    #[test]
    fn test_round_dollar_and_quarter_stack() {
        let mut receipt = plain_receipt();
        receipt.total = "100.00".to_string();
        let points = breakdown(&receipt).unwrap();
        assert_eq!(points.round_dollar, 50);
        assert_eq!(points.quarter_multiple, 25);
    }

    #[test]
    fn test_quarter_without_round_dollar() {
        let mut receipt = plain_receipt();
        receipt.total = "10.75".to_string();
        let points = breakdown(&receipt).unwrap();
        assert_eq!(points.round_dollar, 0);
        assert_eq!(points.quarter_multiple, 25);

        receipt.total = "35.35".to_string();
        let points = breakdown(&receipt).unwrap();
        assert_eq!(points.quarter_multiple, 0);
    }

    #[test]
    fn test_item_pairs() {
        let mut receipt = plain_receipt();
        let item = Item::new("Pepsi - 12-oz", "1.25");
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10), (5, 10)] {
            receipt.items = vec![item.clone(); count];
            assert_eq!(breakdown(&receipt).unwrap().item_pairs, expected, "{} items", count);
        }
    }

    #[test]
    fn test_item_description_bonus() {
        let mut receipt = plain_receipt();
        receipt.items = vec![
            Item::new("Emils Cheese Pizza", "12.25"),          // 18 chars → ceil(2.45) = 3
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"), // 24 chars → ceil(2.40) = 3
            Item::new("Mountain Dew 12PK", "6.49"),           // 17 chars → 0
            Item::new("Doritos Nacho", "15.00"),              // 13 chars → 0
            Item::new("Abc", "15.00"),                        //  3 chars → 3 exactly
        ];
        assert_eq!(breakdown(&receipt).unwrap().item_descriptions, 9);
    }

    #[test]
    fn test_blank_description_counts_as_multiple_of_three() {
        let mut receipt = plain_receipt();
        receipt.items = vec![Item::new("   ", "1.01")];
        assert_eq!(breakdown(&receipt).unwrap().item_descriptions, 1);
    }

    #[test]
    fn test_bad_price_aborts_scoring() {
        let mut receipt = plain_receipt();
        receipt.items = vec![
            Item::new("Abc", "3.00"),
            Item::new("Def", "oops"),
        ];
        assert_eq!(
            score(&receipt),
            Err(ScoringError::InvalidPrice {
                index: 1,
                value: "oops".to_string()
            })
        );
    }

    #[test]
    fn test_bad_price_ignored_when_rule_not_applicable() {
        // 17 characters: the price is never needed
        let mut receipt = plain_receipt();
        receipt.items = vec![Item::new("Mountain Dew 12PK", "oops")];
        assert_eq!(score(&receipt), Ok(6));
    }

    #[test]
    fn test_odd_day() {
        let mut receipt = plain_receipt();
        for (date, expected) in [
            ("2022-01-01", 6),
            ("2022-01-02", 0),
            ("2022-01-31", 6),
            ("2022-03-20", 0),
        ] {
            receipt.purchase_date = date.to_string();
            assert_eq!(breakdown(&receipt).unwrap().odd_day, expected, "{}", date);
        }
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        let mut receipt = plain_receipt();
        for (time, expected) in [
            ("13:59", 0),
            ("14:00", 0),
            ("14:01", 10),
            ("15:00", 10),
            ("15:59", 10),
            ("16:00", 0),
            ("16:01", 0),
        ] {
            receipt.purchase_time = time.to_string();
            assert_eq!(breakdown(&receipt).unwrap().afternoon, expected, "{}", time);
        }
    }

    #[test]
    fn test_unparseable_fields_are_errors() {
        let mut receipt = plain_receipt();
        receipt.total = "12".to_string();
        assert_eq!(score(&receipt), Err(ScoringError::InvalidTotal("12".into())));

        let mut receipt = plain_receipt();
        receipt.purchase_date = "2022-02-30".to_string();
        assert_eq!(score(&receipt), Err(ScoringError::InvalidDate("2022-02-30".into())));

        let mut receipt = plain_receipt();
        receipt.purchase_time = "25:00".to_string();
        assert_eq!(score(&receipt), Err(ScoringError::InvalidTime("25:00".into())));
    }

    #[test]
    fn test_target_example() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        };

        let points = breakdown(&receipt).unwrap();
        assert_eq!(points.retailer, 6);
        assert_eq!(points.item_pairs, 10);
        assert_eq!(points.item_descriptions, 6);
        assert_eq!(points.odd_day, 6);
        assert_eq!(points.total(), 28);
    }
}
