//! # points-service: Orchestration Layer for Receipt Points
//!
//! Owns the state the pure core deliberately does not: the shared
//! duplicate-detection cache and its configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP layer / score-receipt CLI                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ReceiptProcessor ─────────► MemoryCache<Receipt>                       │
//! │        │                      (TTL, janitor)                            │
//! │        ▼                                                                │
//! │  points-core: validate, identify, score                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`cache`] - Thread-safe in-memory expiring cache
//! - [`config`] - Environment configuration
//! - [`processor`] - validate → identify → score
//! - [`loader`] - Receipt JSON files
//! - [`error`] - Service error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use points_service::{MemoryCache, ReceiptProcessor, ServiceConfig};
//!
//! let config = ServiceConfig::load()?;
//! let cache = Arc::new(MemoryCache::with_config(&config));
//! if let Some(interval) = config.cleanup_interval {
//!     MemoryCache::spawn_janitor(&cache, interval);
//! }
//!
//! let processor = ReceiptProcessor::new(cache);
//! let processed = processor.process(&receipt)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod processor;

// =============================================================================
// Re-exports
// =============================================================================

pub use cache::MemoryCache;
pub use config::ServiceConfig;
pub use error::{ConfigError, LoadError, ProcessError, ProcessResult};
pub use loader::read_receipt;
pub use processor::ReceiptProcessor;
