//! Scribe Precepts
//!
//! Parse and evaluate precepts: server-side functions that auto-populate
//! document fields during Insert/Update/Upsert.
//!
//! A precept has the shape `field=FUNCTION(args)`:
//! - `NOW(unit)` — current timestamp; unit one of SEC (default), MSEC, USEC, NSEC
//! - `SERIAL()` — next value of the per-(namespace, field) monotonic counter
//!
//! Keywords match case-insensitively. Parsing resolves the function into a
//! closed variant once; evaluation is an exhaustive match over that variant,
//! never a runtime string comparison.

mod error;
mod eval;
mod parse;
mod precept;

pub use error::{EvalError, EvalResult, ParseError, ParseResult};
pub use eval::EvalContext;
pub use precept::{FunctionKind, Precept, TimeUnit};
