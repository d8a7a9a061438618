use crate::interpretation::{compose_interpretation, DEFAULT_SYMBOL_MENTIONS};
use crate::key::EmotionKey;
use crate::reflection::generate_reflection;
use dreamsight_core::{
    extract_keywords, map_keywords_to_symbols, parse_emotions, AnalysisConfig, AnalysisError,
    DreamAnalysis, Emotion, Symbol, SYMBOL_CATALOG,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::debug;

/// Number of random symbols used when a description matches no keyword.
pub const DEFAULT_FALLBACK_RANGE: RangeInclusive<usize> = 2..=3;

/// Draw a random number of distinct catalog symbols, size uniform in `range`.
///
/// The range is clamped to the catalog size.
pub fn fallback_symbols<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<usize>) -> Vec<Symbol> {
    let lo = (*range.start()).min(SYMBOL_CATALOG.len());
    let hi = (*range.end()).clamp(lo, SYMBOL_CATALOG.len());
    let count = rng.gen_range(lo..=hi);
    SYMBOL_CATALOG
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

/// Full pipeline with default settings: keywords → symbols (or a random
/// fallback) → interpretation → reflection.
///
/// Total over all inputs, including empty text and an empty emotion list.
pub fn generate_dream_analysis<R: Rng + ?Sized>(
    rng: &mut R,
    dream_text: &str,
    emotions: &[Emotion],
) -> DreamAnalysis {
    run_pipeline(
        rng,
        dream_text,
        emotions,
        DEFAULT_FALLBACK_RANGE,
        DEFAULT_SYMBOL_MENTIONS,
    )
}

fn run_pipeline<R: Rng + ?Sized>(
    rng: &mut R,
    dream_text: &str,
    emotions: &[Emotion],
    fallback: RangeInclusive<usize>,
    max_mentions: usize,
) -> DreamAnalysis {
    let keywords = extract_keywords(dream_text);
    let mut symbols = map_keywords_to_symbols(&keywords);
    let used_fallback = symbols.is_empty();
    if used_fallback {
        symbols = fallback_symbols(rng, fallback);
    }

    debug!(
        keywords = keywords.len(),
        symbols = symbols.len(),
        used_fallback,
        key = %EmotionKey::resolve(emotions),
        "dream analyzed"
    );

    let interpretation = compose_interpretation(rng, dream_text, emotions, &symbols, max_mentions);
    let reflection = generate_reflection(rng, emotions);

    DreamAnalysis {
        interpretation,
        symbols,
        reflection,
    }
}

/// Owns the random source and settings for repeated analyses.
///
/// Seed it for reproducible output; by default it draws from OS entropy.
pub struct DreamAnalyzer<R = StdRng> {
    rng: R,
    config: AnalysisConfig,
}

impl DreamAnalyzer<StdRng> {
    pub fn new(config: AnalysisConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(AnalysisConfig {
            seed: Some(seed),
            ..AnalysisConfig::default()
        })
    }
}

impl Default for DreamAnalyzer<StdRng> {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl<R: Rng> DreamAnalyzer<R> {
    pub fn with_rng(rng: R, config: AnalysisConfig) -> Self {
        Self { rng, config }
    }

    pub fn analyze(&mut self, dream_text: &str, emotions: &[Emotion]) -> DreamAnalysis {
        let fallback = self.config.fallback_min_symbols..=self.config.fallback_max_symbols;
        run_pipeline(
            &mut self.rng,
            dream_text,
            emotions,
            fallback,
            self.config.max_symbol_mentions,
        )
    }

    /// Like [`analyze`](Self::analyze) for untyped labels. Any label outside
    /// the six known emotions is rejected before anything is generated.
    pub fn analyze_labels<S: AsRef<str>>(
        &mut self,
        dream_text: &str,
        labels: &[S],
    ) -> Result<DreamAnalysis, AnalysisError> {
        let emotions = parse_emotions(labels)?;
        Ok(self.analyze(dream_text, &emotions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{
        reflection_pool, single_pool, symbol_sentence, CONCLUSIONS, SYMBOL_PHRASINGS,
    };
    use std::collections::HashSet;
    use Emotion::*;

    fn names(symbols: &[Symbol]) -> Vec<&'static str> {
        symbols.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_fallback_size_and_membership() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sizes = HashSet::new();
        for _ in 0..200 {
            let symbols = fallback_symbols(&mut rng, DEFAULT_FALLBACK_RANGE);
            assert!((2..=3).contains(&symbols.len()));
            let distinct: HashSet<_> = names(&symbols).into_iter().collect();
            assert_eq!(distinct.len(), symbols.len());
            assert!(symbols.iter().all(|s| SYMBOL_CATALOG.contains(s)));
            sizes.insert(symbols.len());
        }
        // Both sizes show up over enough draws
        assert_eq!(sizes.len(), 2);
    }

    #[test]
    fn test_fallback_range_clamped_to_catalog() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(fallback_symbols(&mut rng, 30..=40).len(), SYMBOL_CATALOG.len());
        assert_eq!(fallback_symbols(&mut rng, 4..=1).len(), 4);
    }

    #[test]
    fn test_keyword_symbols_skip_fallback() {
        let mut rng = StdRng::seed_from_u64(3);
        let analysis = generate_dream_analysis(&mut rng, "an ocean, a river, a lake", &[Peace]);
        assert_eq!(names(&analysis.symbols), vec!["Water"]);
    }

    #[test]
    fn test_unmatched_text_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(9);
        let analysis = generate_dream_analysis(&mut rng, "xyzzy plugh", &[Fear]);
        assert!((2..=3).contains(&analysis.symbols.len()));
    }

    #[test]
    fn test_flying_forest_scenario() {
        let mut analyzer = DreamAnalyzer::seeded(42);
        let analysis = analyzer.analyze("I was flying over a forest and felt scared", &[Fear]);

        // "scared" contains "car"
        assert_eq!(names(&analysis.symbols), vec!["Flying", "Forest", "Car"]);
        assert!(reflection_pool(Fear).contains(&analysis.reflection.as_str()));

        // Opening, one sentence per symbol in order, then a conclusion
        let text = analysis.interpretation.as_str();
        let mut rest = single_pool(Fear)
            .iter()
            .find_map(|s| text.strip_prefix(s))
            .expect("opens with a Fear sentence");
        let conclusion = CONCLUSIONS
            .iter()
            .find(|c| rest.ends_with(*c))
            .expect("ends with a conclusion");
        rest = rest[..rest.len() - conclusion.len()].trim();

        for symbol in &analysis.symbols {
            rest = (0..SYMBOL_PHRASINGS)
                .map(|v| symbol_sentence(v, symbol))
                .find_map(|sentence| rest.strip_prefix(sentence.as_str()).map(str::trim_start))
                .unwrap_or_else(|| panic!("no sentence for {} in: {}", symbol.name, rest));
        }
        assert_eq!(rest, "", "exactly three symbol sentences");
    }

    #[test]
    fn test_empty_emotions_accepted() {
        let mut analyzer = DreamAnalyzer::seeded(1);
        let analysis = analyzer.analyze("", &[]);
        assert_eq!(analysis.reflection, "");
        assert!(single_pool(Confusion)
            .iter()
            .any(|s| analysis.interpretation.starts_with(s)));
    }

    #[test]
    fn test_analyze_labels_rejects_unknown() {
        let mut analyzer = DreamAnalyzer::seeded(1);
        let err = analyzer
            .analyze_labels("a dog", &["fear", "nostalgia"])
            .unwrap_err();
        assert_eq!(err, AnalysisError::InvalidEmotion("nostalgia".to_string()));

        let ok = analyzer.analyze_labels("a dog", &["fear"]).unwrap();
        assert_eq!(names(&ok.symbols), vec!["Animals"]);
    }

    #[test]
    fn test_same_seed_same_analysis() {
        let a = DreamAnalyzer::seeded(77).analyze("", &[Anger, Sadness]);
        let b = DreamAnalyzer::seeded(77).analyze("", &[Anger, Sadness]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_controls_fallback_and_mentions() {
        let config = AnalysisConfig {
            seed: Some(3),
            max_symbol_mentions: 0,
            fallback_min_symbols: 5,
            fallback_max_symbols: 5,
        };
        let mut analyzer = DreamAnalyzer::new(config);
        let analysis = analyzer.analyze("nothing here", &[Peace]);
        assert_eq!(analysis.symbols.len(), 5);
        for symbol in &analysis.symbols {
            assert!(!analysis
                .interpretation
                .contains(&symbol.meaning.to_lowercase()));
        }
    }
}
