//! The operation × existence decision table.

use scribe_store::CommitMode;

/// The three single-document write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOperation {
    /// Create only; a no-op when the key already exists.
    Insert,
    /// Replace only; a no-op when the key does not exist.
    Update,
    /// Create or replace, whichever the existence check calls for.
    Upsert,
}

/// What a mutation should do, given the operation and the existence answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Whether precepts are applied to the document.
    pub apply_precepts: bool,
    /// The commit to perform, if any.
    pub commit: Option<CommitMode>,
}

impl Decision {
    const SKIP: Decision = Decision {
        apply_precepts: false,
        commit: None,
    };

    const CREATE: Decision = Decision {
        apply_precepts: true,
        commit: Some(CommitMode::Create),
    };

    const REPLACE: Decision = Decision {
        apply_precepts: true,
        commit: Some(CommitMode::Replace),
    };
}

/// Resolve the decision table. This match is the single source of truth for
/// the six operation × existence rows.
pub fn decide(op: MutationOperation, exists: bool) -> Decision {
    match (op, exists) {
        (MutationOperation::Insert, false) => Decision::CREATE,
        (MutationOperation::Insert, true) => Decision::SKIP,
        (MutationOperation::Update, false) => Decision::SKIP,
        (MutationOperation::Update, true) => Decision::REPLACE,
        (MutationOperation::Upsert, false) => Decision::CREATE,
        (MutationOperation::Upsert, true) => Decision::REPLACE,
    }
}

/// When precept evaluation runs, relative to the decision table's answer.
///
/// `Always` reproduces the legacy engine behavior where a skipped Update
/// still consumed SERIAL() counter values; evaluation results are discarded
/// but counter consumption is not rolled back, leaving a gap in the
/// sequence. Gaps are tolerable, duplicate serials are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreceptGating {
    /// Evaluate precepts only when the decision table applies them.
    #[default]
    OnApply,
    /// Evaluate precepts unconditionally, discarding results on skip.
    Always,
}
