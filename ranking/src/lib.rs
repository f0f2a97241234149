//! Scribe Ranking Configuration
//!
//! The validated configuration record forwarded to the external full-text
//! ranking engine. Scribe never interprets these knobs: it checks ranges,
//! round-trips the record through serialization losslessly, and hands it
//! over unmodified. Scoring math lives in the ranking engine.

mod config;
mod error;

pub use config::{RankingConfig, SynonymRule};
pub use error::{RankingError, RankingResult};
