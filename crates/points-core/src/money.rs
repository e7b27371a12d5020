//! # Money Module
//!
//! Provides the `Money` type for the amounts printed on a receipt.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    15.00 * 0.2 = 3.0000000000000004  → ceil = 4  ❌ WRONG!              │
//! │    35.35 % 0.25 = 0.09999999999999787          (not exact either)      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "15.00" → 1500 cents, 1500 / 500 = 3 exactly → ceil = 3             │
//! │    "35.35" → cents part 35, 35 % 25 = 10 → not a quarter multiple      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Upper Bound
//! Every string matching `^\d+\.\d{2}$` parses, however many digits it has.
//! Whole dollars are held in a `u128` that saturates, and the two decimals
//! are kept apart, so the quarter check stays exact at any size and the
//! fraction rule saturates at `u64::MAX` points.
//!
//! ## Usage
//! ```rust
//! use points_core::money::Money;
//!
//! let total = Money::parse("100.00").unwrap();
//! assert!(total.is_quarter_multiple());
//!
//! // 20% of $12.25 is $2.45, rounded up to 3 whole points
//! let price = Money::parse("12.25").unwrap();
//! assert_eq!(price.ceil_fraction(1, 5), 3);
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::error::MoneyParseError;

/// Shape of every amount on a receipt: digits, a dot, exactly two digits.
pub const MONEY_PATTERN: &str = r"^\d+\.\d{2}$";

/// Compiled [`MONEY_PATTERN`], ASCII digits only.
pub(crate) fn money_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?-u:\d)+\.(?-u:\d){2}$").expect("money pattern is valid")
    })
}

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative receipt amount.
///
/// ## Design Decisions
/// - **Dollars and cents apart**: the cents part is always exact, even when
///   the dollar count saturates
/// - **u128 dollars**: 38 digits before saturation, far past any real receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    dollars: u128,
    cents: u8,
}

impl Money {
    /// Parses a receipt amount such as `"35.35"`.
    ///
    /// Fails only when the string does not match `^\d+\.\d{2}$` (no sign,
    /// no thousands separator). Dollar counts beyond `u128::MAX` saturate.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// assert_eq!(Money::parse("6.49").unwrap().cents(), 649);
    /// assert!(Money::parse("99999999999999999999.00").is_ok());
    /// assert!(Money::parse("10.5").is_err());
    /// assert!(Money::parse("-1.00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        if !money_regex().is_match(s) {
            return Err(MoneyParseError(s.to_string()));
        }

        // The pattern guarantees ASCII digits, one dot, two decimals
        let (dollars, cents) = s.split_at(s.len() - 3);
        let dollars = dollars.bytes().fold(0u128, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u128::from(digit - b'0'))
        });
        let cents = cents.bytes().skip(1).fold(0u8, |acc, digit| acc * 10 + (digit - b'0'));

        Ok(Money { dollars, cents })
    }

    /// Returns the value in cents, saturating at `u128::MAX`.
    #[inline]
    pub const fn cents(&self) -> u128 {
        self.dollars.saturating_mul(100).saturating_add(self.cents as u128)
    }

    /// True when the amount is a multiple of $0.25.
    ///
    /// Every whole dollar is four quarters, so only the cents part decides.
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.cents % 25 == 0
    }

    /// Multiplies the amount by `numerator / denominator` and rounds the
    /// result up to whole dollars.
    ///
    /// Computed in integers: `ceil(cents * n / (d * 100))`, saturating at
    /// `u64::MAX`.
    ///
    /// ## Example
    /// ```rust
    /// use points_core::money::Money;
    ///
    /// // $15.00 × 0.2 = $3.00 exactly
    /// assert_eq!(Money::parse("15.00").unwrap().ceil_fraction(1, 5), 3);
    /// // $15.01 × 0.2 = $3.002 → 4
    /// assert_eq!(Money::parse("15.01").unwrap().ceil_fraction(1, 5), 4);
    /// ```
    ///
    /// ## Panics
    /// If `denominator` is zero.
    pub fn ceil_fraction(&self, numerator: u64, denominator: u64) -> u64 {
        assert!(denominator != 0, "denominator must be non-zero");

        let scaled = self.cents().saturating_mul(u128::from(numerator));
        let rounded = scaled.div_ceil(u128::from(denominator) * 100);
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
