//! The namespace store and its commit primitive.

use crate::namespace::{Namespace, NamespaceDef};
use regex_lite::Regex;
use scribe_core::{Document, StorageError, StorageResult, Value};
use std::collections::HashMap;

/// Kind of write a commit performs, decided upstream by the mutation
/// decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Insert a document under a key that was observed absent.
    Create,
    /// Overwrite the document under a key that was observed present.
    Replace,
}

/// In-memory storage engine: a map of open namespaces.
#[derive(Debug, Default)]
pub struct NamespaceStore {
    namespaces: HashMap<String, Namespace>,
}

impl NamespaceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Namespace Lifecycle ====================

    /// Open a namespace. Rejects invalid names and duplicates.
    pub fn add_namespace(&mut self, def: NamespaceDef) -> StorageResult<()> {
        // Identifier pattern: letters, digits, '_', '-'; a leading '#' marks
        // a system namespace.
        let pattern = Regex::new(r"^#?[a-zA-Z][a-zA-Z0-9_\-]*$").unwrap();
        if !pattern.is_match(def.name()) {
            return Err(StorageError::InvalidNamespaceName(def.name().to_string()));
        }
        if self.namespaces.contains_key(def.name()) {
            return Err(StorageError::NamespaceExists(def.name().to_string()));
        }
        self.namespaces
            .insert(def.name().to_string(), Namespace::new(def));
        Ok(())
    }

    /// Close a namespace, discarding its documents.
    pub fn drop_namespace(&mut self, name: &str) -> StorageResult<()> {
        self.namespaces
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::NamespaceNotFound(name.to_string()))
    }

    /// Returns true if the namespace is open.
    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    /// Access an open namespace.
    pub fn namespace(&self, name: &str) -> StorageResult<&Namespace> {
        self.namespaces
            .get(name)
            .ok_or_else(|| StorageError::NamespaceNotFound(name.to_string()))
    }

    fn namespace_mut(&mut self, name: &str) -> StorageResult<&mut Namespace> {
        self.namespaces
            .get_mut(name)
            .ok_or_else(|| StorageError::NamespaceNotFound(name.to_string()))
    }

    // ==================== Document Operations ====================

    /// Does a document with the same primary key already exist?
    pub fn exists(&self, namespace: &str, document: &Document) -> StorageResult<bool> {
        let namespace = self.namespace(namespace)?;
        let key = namespace.key_of(document)?;
        Ok(namespace.contains(&key))
    }

    /// Commit a document, returning the affected count.
    ///
    /// The existence answer that chose `mode` may have gone stale by commit
    /// time. A `Create` against a key that has appeared, or a `Replace`
    /// against a key that has vanished, is a lost race: the commit reports 0
    /// and does not touch the namespace.
    pub fn commit(
        &mut self,
        mode: CommitMode,
        namespace: &str,
        document: &Document,
    ) -> StorageResult<u64> {
        let namespace = self.namespace_mut(namespace)?;
        let key = namespace.key_of(document)?;
        let affected = match mode {
            CommitMode::Create if namespace.contains(&key) => 0,
            CommitMode::Replace if !namespace.contains(&key) => 0,
            CommitMode::Create | CommitMode::Replace => {
                namespace.insert(key, document.clone());
                1
            }
        };
        Ok(affected)
    }

    /// Delete the document sharing `document`'s primary key. Returns the
    /// affected count (1 if a document was removed, 0 otherwise).
    pub fn remove(&mut self, namespace: &str, document: &Document) -> StorageResult<u64> {
        let namespace = self.namespace_mut(namespace)?;
        let key = namespace.key_of(document)?;
        Ok(namespace.remove(&key).map_or(0, |_| 1))
    }

    /// Point lookup by primary-key value.
    pub fn get(&self, namespace: &str, key: &Value) -> StorageResult<Option<&Document>> {
        let namespace = self.namespace(namespace)?;
        let key = crate::Key::from_value(key).ok_or_else(|| {
            StorageError::invalid_primary_key(namespace.def().primary_key(), key.type_name())
        })?;
        Ok(namespace.get(&key))
    }
}
