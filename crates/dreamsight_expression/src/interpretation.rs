use crate::key::EmotionKey;
use crate::templates::{
    pair_pool, single_pool, symbol_sentence, CONCLUSIONS, SYMBOL_PHRASINGS,
};
use dreamsight_core::{Emotion, Symbol};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// How many symbols get their own sentence by default.
pub const DEFAULT_SYMBOL_MENTIONS: usize = 3;

/// The sentence pool an emotion list draws its opening sentence from.
pub fn base_pool(emotions: &[Emotion]) -> &'static [&'static str] {
    match EmotionKey::resolve(emotions) {
        EmotionKey::Unspecified => single_pool(Emotion::Confusion),
        EmotionKey::Single(emotion) => single_pool(emotion),
        EmotionKey::Pair(pair) => {
            // First selected emotion, not the first of the sorted pair
            pair_pool(pair).unwrap_or_else(|| single_pool(emotions[0]))
        }
    }
}

/// Build the interpretation paragraph.
///
/// The opening sentence comes from the pool for `emotions`, followed by one
/// sentence for each of the first three symbols and a closing prompt.
pub fn generate_interpretation<R: Rng + ?Sized>(
    rng: &mut R,
    dream_text: &str,
    emotions: &[Emotion],
    symbols: &[Symbol],
) -> String {
    compose_interpretation(rng, dream_text, emotions, symbols, DEFAULT_SYMBOL_MENTIONS)
}

pub(crate) fn compose_interpretation<R: Rng + ?Sized>(
    rng: &mut R,
    dream_text: &str,
    emotions: &[Emotion],
    symbols: &[Symbol],
    max_mentions: usize,
) -> String {
    trace!(
        text_chars = dream_text.chars().count(),
        key = %EmotionKey::resolve(emotions),
        symbols = symbols.len(),
        "composing interpretation"
    );

    let mut parts: Vec<String> = Vec::with_capacity(max_mentions + 2);
    parts.push(pick(rng, base_pool(emotions)).to_string());
    for symbol in symbols.iter().take(max_mentions) {
        let variant = rng.gen_range(0..SYMBOL_PHRASINGS);
        parts.push(symbol_sentence(variant, symbol));
    }
    parts.push(pick(rng, CONCLUSIONS).to_string());
    parts.join(" ")
}

pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
