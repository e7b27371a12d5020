//! # points-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It decides whether a
//! receipt is acceptable, how many loyalty points it earns, and which
//! identifier it is filed under.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               HTTP layer (outside this workspace)               │   │
//! │  │        POST /receipts/process      GET /receipts/{id}/points    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            points-service (ReceiptProcessor, MemoryCache)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │  scoring  │  │ identifier│  │   money   │  │   │
//! │  │   │  rules    │  │  points   │  │  sha-256  │  │   cents   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Structural and format rules
//! - [`scoring`] - Points rules
//! - [`identifier`] - Receipt fingerprints and duplicate detection
//! - [`cache`] - Contract for the expiring cache the caller provides
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{score, validate, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     total: "35.35".to_string(),
//!     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
//! };
//!
//! validate(&receipt).unwrap();
//! // 6 (retailer) + 6 (odd day)
//! assert_eq!(score(&receipt).unwrap(), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod error;
pub mod identifier;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use points_core::Money` instead of
// `use points_core::money::Money`

pub use cache::{Expiration, ExpiringCache};
pub use error::{CoreError, CoreResult, DuplicateError, ScoringError, ValidationError};
pub use identifier::{fingerprint, identify};
pub use money::Money;
pub use scoring::score;
pub use types::*;
pub use validation::{validate, validate_id};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a receipt identifier: hex-encoded SHA-256.
pub const RECEIPT_ID_LEN: usize = 64;
