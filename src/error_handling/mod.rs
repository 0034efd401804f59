//! Error handling and enrichment statistics.
//!
//! This module provides:
//! - Error type definitions for parsing, resolving and lookup orchestration
//! - Enrichment statistics tracking (lookups that were skipped or failed)
//!
//! Parse errors are fatal for the primary response. Resolver and parse errors
//! that happen during enrichment are counted as warnings instead.

mod stats;
mod types;

// Re-export public API
pub use stats::EnrichmentStats;
pub use types::{
    ConfigValidationError, EnrichmentError, EnrichmentWarning, InitializationError, LookupError,
    ParseError, ResolverError,
};
