//! Precept evaluation.

use crate::error::{EvalError, EvalResult};
use crate::precept::{FunctionKind, Precept, TimeUnit};
use scribe_core::Value;
use scribe_serial::SerialCounters;
use std::time::{SystemTime, UNIX_EPOCH};

/// Evaluation context for a single mutation call: the namespace being
/// mutated and the counter store consulted by SERIAL().
pub struct EvalContext<'a> {
    namespace: &'a str,
    serials: &'a SerialCounters,
}

impl<'a> EvalContext<'a> {
    pub fn new(namespace: &'a str, serials: &'a SerialCounters) -> Self {
        Self { namespace, serials }
    }

    /// Namespace the mutation targets.
    pub fn namespace(&self) -> &str {
        self.namespace
    }
}

impl Precept {
    /// Compute the value for this precept's target field.
    ///
    /// A SERIAL() evaluation consumes exactly one counter value for
    /// `(namespace, field)`; consumption is never rolled back, even when the
    /// surrounding mutation is later discarded.
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalResult<Value> {
        match self.function {
            FunctionKind::Now(unit) => now_value(unit),
            FunctionKind::Serial => {
                let serial = ctx.serials.next(ctx.namespace, &self.field);
                Ok(Value::Int(serial as i64))
            }
        }
    }
}

/// Read the wall clock as a whole count of `unit` since the Unix epoch.
fn now_value(unit: TimeUnit) -> EvalResult<Value> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| EvalError::clock_unavailable(e.to_string()))?;

    let ticks = match unit {
        TimeUnit::Sec => elapsed.as_secs() as i64,
        TimeUnit::Milli => elapsed.as_millis() as i64,
        TimeUnit::Micro => elapsed.as_micros() as i64,
        TimeUnit::Nano => elapsed.as_nanos() as i64,
    };
    Ok(Value::Int(ticks))
}
