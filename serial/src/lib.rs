//! Scribe Serial Counters
//!
//! Per-(namespace, field) monotonic counters backing SERIAL() precepts.
//!
//! Responsibilities:
//! - Lazily create one 64-bit counter per (namespace, field) key
//! - Hand out strictly increasing values under concurrent callers
//! - Drop a namespace's counters together with the namespace

mod counters;

pub use counters::SerialCounters;
