//! Counter storage and the next-value operation.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counter store for SERIAL() precepts.
///
/// One `AtomicU64` per (namespace, field) key, created lazily at 0. The lock
/// guards only the map of counters; the increment itself is a single
/// fetch-and-add on the atomic, so concurrent callers for the same key can
/// never observe the same value.
#[derive(Debug, Default)]
pub struct SerialCounters {
    counters: RwLock<HashMap<String, HashMap<String, Arc<AtomicU64>>>>,
}

impl SerialCounters {
    /// Create an empty counter store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `(namespace, field)` and return the new value.
    ///
    /// A fresh key starts at 0, so the first call returns 1. Returned values
    /// for a key are strictly increasing across all callers; a consumed value
    /// is never handed out again, even if the mutation that consumed it is
    /// later discarded.
    pub fn next(&self, namespace: &str, field: &str) -> u64 {
        let counter = self.counter(namespace, field);
        // The returned value is the only state shared through this counter.
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Drop every counter belonging to `namespace`.
    ///
    /// Counters live for the namespace lifetime; a namespace opened again
    /// after a drop starts its fields over from zero.
    pub fn remove_namespace(&self, namespace: &str) {
        self.counters.write().remove(namespace);
    }

    fn counter(&self, namespace: &str, field: &str) -> Arc<AtomicU64> {
        if let Some(counter) = self
            .counters
            .read()
            .get(namespace)
            .and_then(|fields| fields.get(field))
        {
            return Arc::clone(counter);
        }

        let mut counters = self.counters.write();
        Arc::clone(
            counters
                .entry(namespace.to_string())
                .or_default()
                .entry(field.to_string())
                .or_insert_with(|| Arc::new(AtomicU64::new(0))),
        )
    }
}
