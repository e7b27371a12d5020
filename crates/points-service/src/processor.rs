//! # Receipt Processor
//!
//! Runs the core operations in the order the service exposes them.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process(receipt)                                                       │
//! │                                                                         │
//! │   validate ──► identify ──► score ──► ProcessedReceipt { id, points }  │
//! │      │            │           │                                         │
//! │      ▼            ▼           ▼                                         │
//! │  Validation   Duplicate    Scoring                                      │
//! │                                                                         │
//! │  points(id)                                                             │
//! │                                                                         │
//! │   validate_id ──► cache.get ──► score ──► points                        │
//! │       │              │            │                                     │
//! │       ▼              ▼            ▼                                     │
//! │   Validation      NotFound     Scoring                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A receipt is filed in the cache as soon as `identify` succeeds. If
//! scoring then fails the entry stays, and a resubmission is reported as a
//! duplicate until it expires.

use std::sync::Arc;

use points_core::{identify, score, validate, validate_id, ExpiringCache, ProcessedReceipt, Receipt};
use tracing::{debug, info, warn};

use crate::cache::MemoryCache;
use crate::config::ServiceConfig;
use crate::error::{ProcessError, ProcessResult};

/// Validates, files and scores receipts against one shared cache.
///
/// ## Usage
/// ```rust
/// use points_service::ReceiptProcessor;
/// use points_core::{Item, Receipt};
///
/// let processor = ReceiptProcessor::in_memory(None);
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "6.49".to_string(),
///     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
/// };
///
/// let processed = processor.process(&receipt).unwrap();
/// assert_eq!(processor.points(&processed.id).unwrap(), processed.points);
/// assert!(processor.process(&receipt).is_err());
/// ```
#[derive(Debug)]
pub struct ReceiptProcessor<C = MemoryCache<Receipt>> {
    cache: Arc<C>,
}

impl<C> Clone for ReceiptProcessor<C> {
    fn clone(&self) -> Self {
        ReceiptProcessor {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl ReceiptProcessor<MemoryCache<Receipt>> {
    /// Creates a processor over a fresh in-memory cache.
    pub fn in_memory(default_ttl: Option<std::time::Duration>) -> Self {
        Self::new(Arc::new(MemoryCache::new(default_ttl)))
    }

    /// Creates a processor over a fresh in-memory cache configured from
    /// `config`. The janitor is not started; see [`MemoryCache::spawn_janitor`].
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(Arc::new(MemoryCache::with_config(config)))
    }
}

impl<C: ExpiringCache<Receipt>> ReceiptProcessor<C> {
    /// Creates a processor over a caller-supplied cache.
    pub fn new(cache: Arc<C>) -> Self {
        ReceiptProcessor { cache }
    }

    /// The shared duplicate-detection cache.
    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Accepts a receipt: validates it, files it under its fingerprint and
    /// scores it.
    pub fn process(&self, receipt: &Receipt) -> ProcessResult<ProcessedReceipt> {
        let result = self.run(receipt);

        match &result {
            Ok(processed) => info!(
                id = %processed.id,
                points = processed.points,
                retailer = %receipt.retailer,
                "Receipt processed"
            ),
            Err(err) => warn!(retailer = %receipt.retailer, error = %err, "Receipt rejected"),
        }

        result
    }

    fn run(&self, receipt: &Receipt) -> ProcessResult<ProcessedReceipt> {
        validate(receipt)?;
        let id = identify(receipt, &*self.cache)?;
        let points = score(receipt)?;
        Ok(ProcessedReceipt { id, points })
    }

    /// Points for a receipt filed earlier under `id`.
    ///
    /// Scoring is recomputed from the stored receipt; the result is the same
    /// as when it was processed.
    pub fn points(&self, id: &str) -> ProcessResult<u64> {
        validate_id(id)?;

        let receipt = (*self.cache)
            .get(id)
            .ok_or_else(|| ProcessError::NotFound(id.to_string()))?;

        let points = score(&receipt)?;
        debug!(id = %id, points, "Points looked up");
        Ok(points)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::{DuplicateError, Item, ValidationError};
    use std::time::Duration;

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", "1.25"),
                Item::new("Dasani", "1.40"),
            ],
        }
    }

    #[test]
    fn test_process_returns_id_and_points() {
        let processor = ReceiptProcessor::in_memory(None);
        let processed = processor.process(&receipt()).unwrap();

        assert_eq!(processed.id.len(), 64);
        // 9 (Walgreens) + 5 (one pair) + ceil(1.40 × 0.2) for "Dasani"
        assert_eq!(processed.points, 15);
    }

    #[test]
    fn test_duplicate_rejected() {
        let processor = ReceiptProcessor::in_memory(None);
        let first = processor.process(&receipt()).unwrap();

        assert_eq!(
            processor.process(&receipt()),
            Err(ProcessError::Duplicate(DuplicateError { id: first.id }))
        );
    }

    #[test]
    fn test_invalid_receipt_not_filed() {
        let processor = ReceiptProcessor::in_memory(None);
        let mut bad = receipt();
        bad.total = "2.6".to_string();

        assert!(matches!(
            processor.process(&bad),
            Err(ProcessError::Validation(ValidationError::InvalidMoney { .. }))
        ));
        assert!(processor.cache().is_empty());
    }

    #[test]
    fn test_points_lookup() {
        let processor = ReceiptProcessor::in_memory(None);
        let processed = processor.process(&receipt()).unwrap();
        assert_eq!(processor.points(&processed.id), Ok(processed.points));
    }

    #[test]
    fn test_points_lookup_errors() {
        let processor = ReceiptProcessor::in_memory(None);

        assert!(matches!(
            processor.points("abc 123"),
            Err(ProcessError::Validation(ValidationError::InvalidId(_)))
        ));
        assert_eq!(
            processor.points("abc123"),
            Err(ProcessError::NotFound("abc123".to_string()))
        );
    }

    #[test]
    fn test_expired_receipt_can_be_resubmitted() {
        let processor = ReceiptProcessor::in_memory(Some(Duration::ZERO));
        let first = processor.process(&receipt()).unwrap();

        assert_eq!(
            processor.points(&first.id),
            Err(ProcessError::NotFound(first.id.clone()))
        );
        let second = processor.process(&receipt()).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_clones_share_cache() {
        let processor = ReceiptProcessor::from_config(&ServiceConfig::default());
        let clone = processor.clone();
        let processed = processor.process(&receipt()).unwrap();
        assert_eq!(clone.points(&processed.id), Ok(processed.points));
    }
}
