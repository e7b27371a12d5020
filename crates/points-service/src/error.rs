//! # Service Error Types
//!
//! Error types for the receipt pipeline, configuration and file loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / ScoringError / DuplicateError (points-core)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProcessError (this module) ← adds NotFound for id lookups             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HTTP layer maps to 400 / 404 / 409                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use points_core::{DuplicateError, ScoringError, ValidationError};
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Errors returned by [`crate::ReceiptProcessor`].
///
/// Every variant is scoped to the single request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// Input broke a structural or format rule. Caller should fix and resend.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A validated field failed to parse while scoring.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// The same receipt is already on file.
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),

    /// No live receipt is filed under this identifier.
    ///
    /// ## When This Occurs
    /// - The identifier was never issued
    /// - The entry expired out of the cache
    #[error("no receipt found for id {0}")]
    NotFound(String),
}

impl ProcessError {
    /// True when resubmitting corrected input can succeed.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProcessError::Validation(_) | ProcessError::Duplicate(_) | ProcessError::NotFound(_)
        )
    }
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Failure reading a receipt file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================
