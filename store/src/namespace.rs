//! Namespace definitions and primary-key projection.

use scribe_core::{Document, StorageError, StorageResult, Value};
use std::collections::HashMap;
use std::fmt;

/// Hashable projection of a document's primary-key value.
///
/// Only Int and String values can key a document; Null, Bool, and Float are
/// rejected at projection time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    String(String),
}

impl Key {
    /// Project a value into a key, if its type is keyable.
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::Int(i) => Some(Key::Int(*i)),
            Value::String(s) => Some(Key::String(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::String(s) => write!(f, "{}", s),
        }
    }
}

/// Declaration of a namespace: its name and the field holding the primary
/// key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDef {
    name: String,
    primary_key: String,
}

impl NamespaceDef {
    pub fn new(name: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: primary_key.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }
}

/// An open namespace: its definition plus the documents it holds, keyed by
/// primary key.
#[derive(Debug)]
pub struct Namespace {
    def: NamespaceDef,
    documents: HashMap<Key, Document>,
}

impl Namespace {
    pub fn new(def: NamespaceDef) -> Self {
        Self {
            def,
            documents: HashMap::new(),
        }
    }

    pub fn def(&self) -> &NamespaceDef {
        &self.def
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Project the primary key out of a document.
    ///
    /// A missing primary-key field or a non-keyable value is a storage
    /// error, surfaced before any write happens.
    pub fn key_of(&self, document: &Document) -> StorageResult<Key> {
        let field = self.def.primary_key();
        let value = document
            .get(field)
            .ok_or_else(|| StorageError::missing_primary_key(self.def.name(), field))?;
        Key::from_value(value)
            .ok_or_else(|| StorageError::invalid_primary_key(field, value.type_name()))
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.documents.contains_key(key)
    }

    pub fn get(&self, key: &Key) -> Option<&Document> {
        self.documents.get(key)
    }

    pub(crate) fn insert(&mut self, key: Key, document: Document) {
        self.documents.insert(key, document);
    }

    pub(crate) fn remove(&mut self, key: &Key) -> Option<Document> {
        self.documents.remove(key)
    }
}
