//! The ranking configuration record.

use crate::error::{RankingError, RankingResult};
use serde::{Deserialize, Serialize};

/// A synonym replacement rule: query tokens and the alternatives the engine
/// searches for in their place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynonymRule {
    /// Source tokens in the query.
    pub tokens: Vec<String>,
    /// Alternatives used to match documents.
    pub alternatives: Vec<String>,
}

/// Configuration of the external full-text ranking engine.
///
/// A pure value object: validated range-wise on acceptance, serialized
/// without loss, never interpreted by the mutation pipeline. Missing fields
/// deserialize to the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Boost of the bm25 rank.
    pub bm25_boost: f64,
    /// Weight of the bm25 rank in the final rank (0 = no effect, 1 = full).
    pub bm25_weight: f64,
    /// Boost of term distance within a found document.
    pub distance_boost: f64,
    /// Weight of term distance in the final rank.
    pub distance_weight: f64,
    /// Boost of query term length.
    pub term_len_boost: f64,
    /// Weight of query term length in the final rank.
    pub term_len_weight: f64,
    /// Boost applied when the whole search phrase matches the document.
    pub full_match_boost: f64,
    /// Minimum rank of returned documents.
    pub min_relevancy: f64,
    /// Maximum typos tolerated per word (0 disables typo matching).
    pub max_typos_in_word: u32,
    /// Maximum word length for building typo variants.
    pub max_typo_len: u32,
    /// Maximum commit steps; 1 forces a full rebuild every time.
    pub max_rebuild_steps: u32,
    /// Maximum words per commit step.
    pub max_step_size: u32,
    /// Maximum documents processed when merging query results.
    pub merge_limit: u32,
    /// Stemmers applied to document and query terms.
    pub stemmers: Vec<String>,
    /// Process transliterated variants.
    pub enable_translit: bool,
    /// Process wrong-keyboard-layout variants.
    pub enable_kb_layout: bool,
    /// Words ignored in documents and queries.
    pub stop_words: Vec<String>,
    /// Synonym replacement rules.
    pub synonyms: Vec<SynonymRule>,
    /// Log level of the ranking engine.
    pub log_level: u32,
    /// Match numbers as words and the other way around.
    pub enable_numbers_search: bool,
    /// Extra symbols treated as word characters besides letters and digits.
    pub extra_word_symbols: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            bm25_boost: 1.0,
            bm25_weight: 0.5,
            distance_boost: 1.0,
            distance_weight: 0.5,
            term_len_boost: 1.0,
            term_len_weight: 0.3,
            full_match_boost: 1.1,
            min_relevancy: 0.05,
            max_typos_in_word: 1,
            max_typo_len: 15,
            max_rebuild_steps: 50,
            max_step_size: 4000,
            merge_limit: 20000,
            stemmers: vec!["en".to_string(), "ru".to_string()],
            enable_translit: true,
            enable_kb_layout: true,
            stop_words: Vec::new(),
            synonyms: Vec::new(),
            log_level: 0,
            enable_numbers_search: false,
            extra_word_symbols: "/-+".to_string(),
        }
    }
}

impl RankingConfig {
    /// Check every field against its documented bounds.
    pub fn validate(&self) -> RankingResult<()> {
        for (field, value) in [
            ("bm25_weight", self.bm25_weight),
            ("distance_weight", self.distance_weight),
            ("term_len_weight", self.term_len_weight),
            ("min_relevancy", self.min_relevancy),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RankingError::out_of_range(field, value, "0..=1"));
            }
        }

        for (field, value) in [
            ("bm25_boost", self.bm25_boost),
            ("distance_boost", self.distance_boost),
            ("term_len_boost", self.term_len_boost),
            ("full_match_boost", self.full_match_boost),
        ] {
            if value <= 0.0 || value.is_nan() {
                return Err(RankingError::out_of_range(field, value, "> 0"));
            }
        }

        if self.max_typos_in_word > 2 {
            return Err(RankingError::out_of_range(
                "max_typos_in_word",
                self.max_typos_in_word,
                "0..=2",
            ));
        }
        if !(1..=500).contains(&self.max_rebuild_steps) {
            return Err(RankingError::out_of_range(
                "max_rebuild_steps",
                self.max_rebuild_steps,
                "1..=500",
            ));
        }
        if self.max_step_size < 5 {
            return Err(RankingError::out_of_range(
                "max_step_size",
                self.max_step_size,
                ">= 5",
            ));
        }
        if self.merge_limit < 1 {
            return Err(RankingError::out_of_range(
                "merge_limit",
                self.merge_limit,
                ">= 1",
            ));
        }
        if self.log_level > 4 {
            return Err(RankingError::out_of_range(
                "log_level",
                self.log_level,
                "0..=4",
            ));
        }
        Ok(())
    }
}
