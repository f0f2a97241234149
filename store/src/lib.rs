//! Scribe Namespace Store
//!
//! In-memory namespace storage: one primary-key → document map per open
//! namespace.
//!
//! Responsibilities:
//! - Namespace lifecycle (open, drop) with name validation
//! - Primary-key projection of documents
//! - The `exists` / `commit` primitives the mutation orchestrator consumes
//! - Point lookup and delete
//!
//! The store is `&mut`-disciplined: one writer at a time at the type level.
//! Commit resolves insert/replace races by reporting affected 0 to the loser
//! rather than erroring.

mod namespace;
mod store;

pub use namespace::{Key, Namespace, NamespaceDef};
pub use store::{CommitMode, NamespaceStore};
