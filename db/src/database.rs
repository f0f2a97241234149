//! The Database facade.

use scribe_core::{Document, StorageError, Value};
use scribe_mutation::{MutationExecutor, MutationOperation, PreceptGating};
use scribe_precept::Precept;
use scribe_ranking::RankingConfig;
use scribe_serial::SerialCounters;
use scribe_store::{NamespaceDef, NamespaceStore};
use std::collections::HashMap;
use tracing::debug;

use crate::error::DatabaseResult;

/// An embedded document database: namespaces, serial counters, and the
/// precept-driven mutation pipeline behind one owner.
#[derive(Debug, Default)]
pub struct Database {
    store: NamespaceStore,
    serials: SerialCounters,
    gating: PreceptGating,
    ranking: HashMap<String, RankingConfig>,
}

impl Database {
    /// Create a database with the default precept gating policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database with an explicit precept gating policy.
    pub fn with_gating(gating: PreceptGating) -> Self {
        Self {
            gating,
            ..Self::default()
        }
    }

    // ==================== Namespace Lifecycle ====================

    /// Open a namespace.
    pub fn open_namespace(&mut self, def: NamespaceDef) -> DatabaseResult<()> {
        let name = def.name().to_string();
        self.store.add_namespace(def)?;
        debug!(namespace = %name, "namespace opened");
        Ok(())
    }

    /// Drop a namespace, its documents, its serial counters, and its
    /// ranking configuration.
    pub fn drop_namespace(&mut self, name: &str) -> DatabaseResult<()> {
        self.store.drop_namespace(name)?;
        self.serials.remove_namespace(name);
        self.ranking.remove(name);
        debug!(namespace = %name, "namespace dropped");
        Ok(())
    }

    /// Returns true if the namespace is open.
    pub fn has_namespace(&self, name: &str) -> bool {
        self.store.has_namespace(name)
    }

    // ==================== Mutations ====================

    /// Insert a document; a no-op when the primary key already exists.
    pub fn insert(
        &mut self,
        namespace: &str,
        document: &mut Document,
        precepts: &[&str],
    ) -> DatabaseResult<u64> {
        self.mutate(MutationOperation::Insert, namespace, document, precepts)
    }

    /// Replace the document sharing the primary key; a no-op when none
    /// exists.
    pub fn update(
        &mut self,
        namespace: &str,
        document: &mut Document,
        precepts: &[&str],
    ) -> DatabaseResult<u64> {
        self.mutate(MutationOperation::Update, namespace, document, precepts)
    }

    /// Insert or replace, whichever the existence check calls for.
    pub fn upsert(
        &mut self,
        namespace: &str,
        document: &mut Document,
        precepts: &[&str],
    ) -> DatabaseResult<u64> {
        self.mutate(MutationOperation::Upsert, namespace, document, precepts)
    }

    fn mutate(
        &mut self,
        op: MutationOperation,
        namespace: &str,
        document: &mut Document,
        precepts: &[&str],
    ) -> DatabaseResult<u64> {
        // Parse everything before evaluating anything: one bad precept
        // rejects the whole mutation with no counter consumption.
        let precepts = precepts
            .iter()
            .map(|p| Precept::parse(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut executor =
            MutationExecutor::with_gating(&mut self.store, &self.serials, self.gating);
        let outcome = executor.execute(op, namespace, document, &precepts)?;
        if outcome.is_skipped() {
            debug!(namespace = %namespace, op = ?op, "mutation skipped");
        }
        Ok(outcome.affected())
    }

    // ==================== Reads and Deletes ====================

    /// Delete the document sharing `document`'s primary key. Returns the
    /// affected count.
    pub fn delete(&mut self, namespace: &str, document: &Document) -> DatabaseResult<u64> {
        Ok(self.store.remove(namespace, document)?)
    }

    /// Point lookup by primary-key value.
    pub fn get(&self, namespace: &str, key: &Value) -> DatabaseResult<Option<&Document>> {
        Ok(self.store.get(namespace, key)?)
    }

    // ==================== Ranking Configuration ====================

    /// Validate and retain a ranking configuration for a namespace. The
    /// record is forwarded to the external ranking engine unmodified.
    pub fn configure_ranking(
        &mut self,
        namespace: &str,
        config: RankingConfig,
    ) -> DatabaseResult<()> {
        if !self.store.has_namespace(namespace) {
            return Err(StorageError::NamespaceNotFound(namespace.to_string()).into());
        }
        config.validate()?;
        self.ranking.insert(namespace.to_string(), config);
        debug!(namespace = %namespace, "ranking config accepted");
        Ok(())
    }

    /// The ranking configuration retained for a namespace, if any.
    pub fn ranking_config(&self, namespace: &str) -> Option<&RankingConfig> {
        self.ranking.get(namespace)
    }
}
