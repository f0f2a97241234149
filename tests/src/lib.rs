//! Shared fixtures for the Scribe acceptance tests.

pub mod prelude {
    pub use scribe_core::{doc, Document, Value};
    pub use scribe_db::{Database, DatabaseError};
    pub use scribe_mutation::PreceptGating;
    pub use scribe_ranking::{RankingConfig, SynonymRule};
    pub use scribe_store::NamespaceDef;

    pub use crate::{int_field, items_db};
}

use prelude::*;

/// A database with a single open namespace `items`, keyed by `id`.
pub fn items_db() -> Database {
    let mut db = Database::new();
    db.open_namespace(NamespaceDef::new("items", "id"))
        .expect("open items namespace");
    db
}

/// Read an integer field off the stored copy of a document.
pub fn int_field(db: &Database, namespace: &str, key: i64, field: &str) -> Option<i64> {
    db.get(namespace, &Value::Int(key))
        .expect("namespace is open")
        .and_then(|d| d.get(field))
        .and_then(|v| v.as_int())
}
