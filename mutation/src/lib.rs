//! Scribe Mutation
//!
//! Orchestrate Insert/Update/Upsert calls: decide whether precepts apply,
//! evaluate them, and commit through the namespace store.
//!
//! Responsibilities:
//! - The six-row operation × existence decision table
//! - Precept gating policy (evaluate on apply only, or always)
//! - Applying evaluated values to the caller's document in precept order
//! - Mapping the store's commit answer to a mutation outcome
//!
//! # Module Structure
//!
//! - `decision` - MutationOperation, the decision table, PreceptGating
//! - `executor` - MutationExecutor coordinating store, counters, precepts
//! - `result` - MutationOutcome and the affected count
//! - `error` - Error types for mutation failures

mod decision;
mod error;
mod executor;
mod result;

pub use decision::{decide, Decision, MutationOperation, PreceptGating};
pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
pub use result::MutationOutcome;
