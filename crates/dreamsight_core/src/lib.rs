//! # DreamSight core
//!
//! Data model and static knowledge shared by the other crates:
//!
//! - [`Emotion`] and [`EmotionSelection`]: the six tags a dream can carry
//! - [`SYMBOL_CATALOG`] and [`KEYWORD_TABLE`]: the fixed symbol vocabulary
//! - [`extract_keywords`] / [`map_keywords_to_symbols`]: text → symbols
//! - [`DreamAnalysis`] / [`DreamEntry`]: what the engine produces and what
//!   the journal stores
//!
//! Everything here is immutable once built and safe to read from any thread.

pub mod config;
pub mod emotion;
pub mod entry;
pub mod error;
pub mod keywords;
pub mod symbols;

pub use config::{AnalysisConfig, CommunityConfig, DreamsightConfig, PacingConfig};
pub use emotion::{parse_emotions, Emotion, EmotionSelection, MAX_EMOTIONS};
pub use entry::{DreamAnalysis, DreamEntry};
pub use error::AnalysisError;
pub use keywords::{extract_keywords, map_keywords_to_symbols, symbols_in};
pub use symbols::{find_symbol, symbol_for_keyword, Symbol, KEYWORD_TABLE, SYMBOL_CATALOG};
