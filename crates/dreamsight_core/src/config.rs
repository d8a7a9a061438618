use crate::symbols::SYMBOL_CATALOG;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DreamsightConfig {
    pub analysis: AnalysisConfig,
    pub pacing: PacingConfig,
    pub community: CommunityConfig,
}

impl DreamsightConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied and the result validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: DreamsightConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist or is invalid, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                if let Err(e) = cfg.validate() {
                    tracing::warn!("Ignoring env overrides ({:#})", e);
                    cfg = Self::default();
                }
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("DREAMSIGHT_SEED") {
            if let Ok(n) = v.parse() {
                self.analysis.seed = Some(n);
            }
        }
        if let Ok(v) = std::env::var("DREAMSIGHT_DELAY_MS") {
            if let Ok(n) = v.parse() {
                self.pacing.delay_ms = n;
            }
        }
        if let Ok(v) = std::env::var("DREAMSIGHT_AUTHOR") {
            if !v.trim().is_empty() {
                self.community.comment_author = v;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let a = &self.analysis;
        ensure!(
            a.fallback_min_symbols >= 1,
            "analysis.fallback_min_symbols must be at least 1"
        );
        ensure!(
            a.fallback_min_symbols <= a.fallback_max_symbols,
            "analysis.fallback_min_symbols ({}) exceeds fallback_max_symbols ({})",
            a.fallback_min_symbols,
            a.fallback_max_symbols
        );
        ensure!(
            a.fallback_max_symbols <= SYMBOL_CATALOG.len(),
            "analysis.fallback_max_symbols ({}) exceeds the catalog size ({})",
            a.fallback_max_symbols,
            SYMBOL_CATALOG.len()
        );
        ensure!(
            (0.0..=0.5).contains(&self.pacing.jitter),
            "pacing.jitter must be within 0.0..=0.5, got {}",
            self.pacing.jitter
        );
        Ok(())
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// How many symbols get a sentence in the interpretation.
    pub max_symbol_mentions: usize,
    /// Bounds (inclusive) on the number of random symbols used when the
    /// description matches no keyword.
    pub fallback_min_symbols: usize,
    pub fallback_max_symbols: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_symbol_mentions: 3,
            fallback_min_symbols: 2,
            fallback_max_symbols: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Artificial wait before an analysis is shown.
    pub delay_ms: u64,
    /// Fractional jitter applied to `delay_ms` (0.2 = ±20%).
    pub jitter: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            jitter: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommunityConfig {
    pub comment_author: String,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            comment_author: "Anonymous User".to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
