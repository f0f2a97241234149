//! Mutation executor - coordinates the existence check, precept
//! evaluation, and commit of a single mutation call.

use scribe_core::Document;
use scribe_precept::{EvalContext, Precept};
use scribe_serial::SerialCounters;
use scribe_store::{CommitMode, NamespaceStore};

use crate::decision::{decide, MutationOperation, PreceptGating};
use crate::error::MutationResult;
use crate::result::MutationOutcome;

/// Mutation executor.
///
/// Borrows the store mutably and the counter store shared; one executor
/// drives one or more mutation calls against the same collaborators.
pub struct MutationExecutor<'s, 'c> {
    store: &'s mut NamespaceStore,
    serials: &'c SerialCounters,
    gating: PreceptGating,
}

impl<'s, 'c> MutationExecutor<'s, 'c> {
    /// Create an executor with the default gating policy.
    pub fn new(store: &'s mut NamespaceStore, serials: &'c SerialCounters) -> Self {
        Self::with_gating(store, serials, PreceptGating::default())
    }

    /// Create an executor with an explicit gating policy.
    pub fn with_gating(
        store: &'s mut NamespaceStore,
        serials: &'c SerialCounters,
        gating: PreceptGating,
    ) -> Self {
        Self {
            store,
            serials,
            gating,
        }
    }

    /// Execute one mutation.
    ///
    /// The existence check runs first and feeds the decision table. It is
    /// not atomically coupled with evaluation or commit: once a SERIAL()
    /// precept has evaluated, its counter value stays consumed even if the
    /// commit turns out to be a lost race. Precepts apply in caller order;
    /// when several target the same field, each still evaluates and the
    /// last result wins.
    pub fn execute(
        &mut self,
        op: MutationOperation,
        namespace: &str,
        document: &mut Document,
        precepts: &[Precept],
    ) -> MutationResult<MutationOutcome> {
        let exists = self.store.exists(namespace, document)?;
        let decision = decide(op, exists);

        if decision.apply_precepts || self.gating == PreceptGating::Always {
            let ctx = EvalContext::new(namespace, self.serials);
            for precept in precepts {
                let value = precept.evaluate(&ctx)?;
                if decision.apply_precepts {
                    document.set(precept.field(), value);
                }
            }
        }

        let Some(mode) = decision.commit else {
            return Ok(MutationOutcome::Skipped);
        };

        // The store's answer is authoritative: a 0 here means the existence
        // answer went stale and the commit lost the race.
        let affected = self.store.commit(mode, namespace, document)?;
        let outcome = match (affected, mode) {
            (0, _) => MutationOutcome::Skipped,
            (_, CommitMode::Create) => MutationOutcome::Created,
            (_, CommitMode::Replace) => MutationOutcome::Replaced,
        };
        Ok(outcome)
    }
}
