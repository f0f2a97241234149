//! Scribe Database Facade
//!
//! The caller-facing surface of the mutation pipeline. A `Database` owns
//! the namespace store, the serial counter store, and the per-namespace
//! ranking configurations, and exposes:
//!
//! - namespace lifecycle (`open_namespace` / `drop_namespace`)
//! - the mutation entry points (`insert` / `update` / `upsert`)
//! - point reads and deletes (`get` / `delete`)
//! - ranking-config acceptance (`configure_ranking` / `ranking_config`)
//!
//! Precept strings are parsed up front: one bad precept rejects the whole
//! mutation before anything is evaluated or committed.

mod database;
mod error;

pub use database::Database;
pub use error::{DatabaseError, DatabaseResult};
