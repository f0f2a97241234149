//! The Document record.
//!
//! A document is a flat field → value map. The mutation pipeline never
//! interprets a document's schema: it only writes auto-generated values at a
//! field name and reads the primary-key field declared by the namespace.
//! Documents are exclusively owned by the caller; the pipeline borrows them
//! mutably for the duration of a single mutation call.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mutable field → value record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: HashMap<String, Value>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Set a field, overwriting any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Remove a field, returning its value if present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns true if the field is present.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// Helper macro to build documents.
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {
        {
            let mut document = $crate::Document::new();
            $(
                document.set($field, $crate::Value::from($value));
            )+
            document
        }
    };
}
