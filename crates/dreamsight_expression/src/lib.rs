//! # DreamSight expression
//!
//! Turns a dream description and its emotion tags into a [`DreamAnalysis`]:
//!
//! 1. keywords found in the text are mapped to catalog symbols, or a random
//!    handful of symbols is drawn when nothing matches
//! 2. an interpretation is assembled from an emotion-keyed opening sentence,
//!    one sentence per symbol (up to three) and a closing prompt
//! 3. a reflection adds one sentence per emotion
//!
//! Wording is chosen at random from fixed pools. The random source is always
//! passed in (or owned by a [`DreamAnalyzer`]) so output can be reproduced
//! from a seed.
//!
//! [`DreamAnalysis`]: dreamsight_core::DreamAnalysis

mod analyzer;
mod interpretation;
pub mod key;
mod pacing;
mod reflection;
pub mod templates;

pub use analyzer::{fallback_symbols, generate_dream_analysis, DreamAnalyzer, DEFAULT_FALLBACK_RANGE};
pub use interpretation::{base_pool, generate_interpretation, DEFAULT_SYMBOL_MENTIONS};
pub use key::{EmotionKey, EmotionPair};
pub use pacing::ThinkingDelay;
pub use reflection::generate_reflection;
