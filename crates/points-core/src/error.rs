//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── ValidationError  - Input fails a structural/format rule           │
//! │  ├── ScoringError     - A field that passed validation won't parse     │
//! │  ├── DuplicateError   - Fingerprint already present in the cache       │
//! │  ├── MoneyParseError  - Not a `digits.dd` amount                       │
//! │  └── CoreError        - Umbrella over all of the above                 │
//! │                                                                         │
//! │  points-service errors (separate crate)                                │
//! │  ├── ProcessError     - What a caller of the pipeline sees             │
//! │  └── ConfigError      - Bad environment values                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every validation message
//! 3. Errors are enum variants, never String
//! 4. Every error is scoped to one request, none is fatal

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any scoring or hashing happens. The caller fixes the input
/// and resubmits; nothing is retried automatically.
///
/// Item fields are reported with their position, e.g.
/// `items[2].price`, so two failures on different items stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// The receipt has no items.
    #[error("at least one item is required")]
    NoItems,

    /// Field contains characters outside letters, digits, underscore,
    /// whitespace and hyphen.
    #[error("{field} has invalid characters")]
    InvalidCharacters { field: String },

    /// Field is not a `YYYY-MM-DD` calendar date.
    #[error("{field} must be a date in YYYY-MM-DD format: '{value}'")]
    InvalidDate { field: String, value: String },

    /// Field is not a 24-hour `HH:MM` time.
    #[error("{field} must be a time in 24-hour HH:MM format: '{value}'")]
    InvalidTime { field: String, value: String },

    /// Field is not a `digits.dd` money amount.
    #[error("{field} must be an amount with exactly two decimals: '{value}'")]
    InvalidMoney { field: String, value: String },

    /// Identifier is empty or contains whitespace.
    #[error("invalid receipt id: '{0}'")]
    InvalidId(String),
}

impl ValidationError {
    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidCharacters { field }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::InvalidTime { field, .. }
            | ValidationError::InvalidMoney { field, .. } => Some(field.as_str()),
            ValidationError::NoItems => Some("items"),
            ValidationError::InvalidId(_) => None,
        }
    }
}

// =============================================================================
// Scoring Error
// =============================================================================

/// A field failed to parse while scoring.
///
/// ## When This Occurs
/// Only when `score` is handed a receipt that never went through
/// `validate`. On validated input this is unreachable, so it is surfaced as
/// a hard error instead of being counted as zero points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// An item price could not be parsed. Aborts the whole calculation.
    #[error("failed to parse price of item {index}: '{value}'")]
    InvalidPrice { index: usize, value: String },

    /// The receipt total could not be parsed.
    #[error("failed to parse total: '{0}'")]
    InvalidTotal(String),

    /// The purchase date could not be parsed.
    #[error("failed to parse purchase date: '{0}'")]
    InvalidDate(String),

    /// The purchase time could not be parsed.
    #[error("failed to parse purchase time: '{0}'")]
    InvalidTime(String),
}

// =============================================================================
// Duplicate Error
// =============================================================================

/// The same receipt was already accepted and has not expired yet.
///
/// Carries the identifier the earlier submission was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("receipt {id} was already submitted")]
pub struct DuplicateError {
    pub id: String,
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// A string is not a non-negative amount with exactly two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{0}': expected digits followed by exactly two decimals")]
pub struct MoneyParseError(pub String);

// =============================================================================
// Core Error
// =============================================================================

/// Any error this crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateError),

    #[error(transparent)]
    Money(#[from] MoneyParseError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
