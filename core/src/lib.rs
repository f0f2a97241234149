//! Scribe Core Types
//!
//! This crate provides the foundational types used throughout the Scribe
//! system:
//! - Value types (the scalar Value enum stored in document fields)
//! - The Document record (field map plus the `doc!` builder macro)
//! - Common storage error types

mod document;
mod error;
mod value;

pub use document::*;
pub use error::*;
pub use value::*;
