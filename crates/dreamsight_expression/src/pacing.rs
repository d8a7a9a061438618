use dreamsight_core::PacingConfig;
use rand::Rng;
use std::time::Duration;

/// Artificial wait shown before an analysis, so the result doesn't appear
/// to be instant. The engine itself never sleeps.
#[derive(Debug, Clone, PartialEq)]
pub struct ThinkingDelay {
    base: Duration,
    jitter: f64,
}

impl ThinkingDelay {
    pub fn new(base: Duration, jitter: f64) -> Self {
        Self {
            base,
            jitter: if jitter.is_finite() {
                jitter.clamp(0.0, 0.5)
            } else {
                0.0
            },
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, 0.0)
    }

    pub fn from_config(config: &PacingConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.jitter)
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    /// Base duration scaled by a random factor in `[1 - jitter, 1 + jitter]`.
    pub fn delay(&self) -> Duration {
        self.delay_with(&mut rand::thread_rng())
    }

    pub fn delay_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.jitter <= f64::EPSILON || self.base.is_zero() {
            return self.base;
        }
        let factor = rng.gen_range((1.0 - self.jitter)..=(1.0 + self.jitter));
        self.base.mul_f64(factor)
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::from_config(&PacingConfig::default())
    }
}
