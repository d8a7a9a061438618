//! Keyword extraction and symbol mapping.
//!
//! Matching is plain substring containment on the lower-cased text, so
//! "cats" and "concatenate" both contain "cat" and "scared" contains "car".
//! Callers rely on this behavior; word-boundary matching would change
//! which symbols existing descriptions produce.

use crate::symbols::{symbol_for_keyword, Symbol, KEYWORD_TABLE};

/// Keywords occurring anywhere in `text`, in keyword-table order.
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .map(|(keyword, _)| *keyword)
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// Resolve keywords to distinct symbols.
///
/// The first keyword that evokes a symbol fixes its position. Tokens that
/// are not in the keyword table are skipped.
pub fn map_keywords_to_symbols<S: AsRef<str>>(keywords: &[S]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::new();
    for keyword in keywords {
        let Some(symbol) = symbol_for_keyword(keyword.as_ref()) else {
            continue;
        };
        if !symbols.iter().any(|s| s.name == symbol.name) {
            symbols.push(symbol);
        }
    }
    symbols
}

/// Extraction followed by mapping, without any fallback.
pub fn symbols_in(text: &str) -> Vec<Symbol> {
    map_keywords_to_symbols(&extract_keywords(text))
}
