//! Recommendation module.

mod alternative;

pub use alternative::{explanation_prompt, find_alternative, AlternativeRanker, EcoScoreRanker};
