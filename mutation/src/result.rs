//! Mutation result types.

/// Outcome of a mutation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A document was created.
    Created,
    /// The existing document was replaced.
    Replaced,
    /// Nothing was written: the decision table skipped the operation, or
    /// the commit lost a race and reported 0.
    Skipped,
}

impl MutationOutcome {
    /// Number of documents created or replaced (0 or 1).
    pub fn affected(&self) -> u64 {
        match self {
            MutationOutcome::Created | MutationOutcome::Replaced => 1,
            MutationOutcome::Skipped => 0,
        }
    }

    /// Returns true if nothing was written.
    pub fn is_skipped(&self) -> bool {
        matches!(self, MutationOutcome::Skipped)
    }
}
