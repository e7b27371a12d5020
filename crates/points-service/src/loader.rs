//! Reading receipts from JSON files.

use std::fs;
use std::path::Path;

use points_core::Receipt;
use tracing::debug;

use crate::error::LoadError;

/// Reads and parses one receipt JSON file.
///
/// Only the JSON shape is checked here; run the result through
/// [`crate::ReceiptProcessor::process`] for the receipt rules.
pub fn read_receipt(path: &Path) -> Result<Receipt, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let receipt: Receipt = serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), items = receipt.items.len(), "Receipt loaded");
    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================
