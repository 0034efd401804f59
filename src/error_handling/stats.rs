//! Enrichment statistics tracking.
//!
//! This module provides thread-safe counters for the lookups that the
//! enrichment pipeline could not complete.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::EnrichmentWarning;

/// Thread-safe enrichment statistics tracker.
///
/// Every [`EnrichmentWarning`] kind is initialized to zero on creation, so the
/// struct can be shared across tasks with `Arc` and incremented without locks.
pub struct EnrichmentStats {
    warnings: HashMap<EnrichmentWarning, AtomicUsize>,
}

impl EnrichmentStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in EnrichmentWarning::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }

        EnrichmentStats { warnings }
    }

    /// Increment a warning counter.
    pub fn increment(&self, warning: EnrichmentWarning) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment enrichment counter for {:?} which is not in the map",
                warning
            );
        }
    }

    /// Get the count for a warning kind.
    pub fn get(&self, warning: EnrichmentWarning) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.warnings
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs non-zero counters at info level.
    pub fn log_summary(&self) {
        for warning in EnrichmentWarning::iter() {
            let count = self.get(warning);
            if count > 0 {
                log::info!("{}: {}", warning, count);
            }
        }
    }
}

impl Default for EnrichmentStats {
    fn default() -> Self {
        Self::new()
    }
}
