//! Aggregate statistics over stored articles.

use serde::Serialize;
use std::collections::HashMap;

/// Snapshot of store contents, computed on demand.
///
/// Computation is O(n) over the live map; acceptable for a volatile,
/// process-local store.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StoreStats {
    /// Number of stored articles
    pub total: usize,
    /// Article counts keyed by terminal status
    pub by_status: HashMap<String, usize>,
    /// Article counts keyed by requested tone
    pub by_tone: HashMap<String, usize>,
    /// Article counts keyed by requested length bucket
    pub by_length: HashMap<String, usize>,
    /// Mean pipeline wall time across stored articles, zero when empty
    pub average_processing_time_ms: u64,
}
