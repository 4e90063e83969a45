//! Configuration types shared by the orchestrator and the engines.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::VerdeError;

/// Relative weight of each raw signal family during fusion.
///
/// Weights must be finite, non-negative, and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    /// Structured sustainability scores.
    pub sustainability: f64,
    /// Recency-weighted news signal.
    pub news: f64,
    /// Long-form disclosure signal.
    pub filing: f64,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            sustainability: 0.50,
            news: 0.35,
            filing: 0.15,
        }
    }
}

impl PillarWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    /// Check that the weights form a convex combination.
    ///
    /// # Errors
    /// Returns [`VerdeError::Config`] on a negative, non-finite, or
    /// non-unit-sum set of weights.
    pub fn validate(&self) -> Result<(), VerdeError> {
        let parts = [
            ("sustainability", self.sustainability),
            ("news", self.news),
            ("filing", self.filing),
        ];
        for (name, w) in parts {
            if !w.is_finite() || w < 0.0 {
                return Err(VerdeError::Config(format!(
                    "signal weight `{name}` must be finite and non-negative, got {w}"
                )));
            }
        }
        let sum = self.sustainability + self.news + self.filing;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(VerdeError::Config(format!(
                "signal weights must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }
}

/// News recency weighting controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewsConfig {
    /// e-folding age of the exponential decay weight, in days.
    pub decay_days: f64,
    /// Most recent headlines considered per ticker.
    pub max_headlines: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            decay_days: 21.0,
            max_headlines: 40,
        }
    }
}

impl NewsConfig {
    /// Check decay and cap values.
    ///
    /// # Errors
    /// Returns [`VerdeError::Config`] when the decay is not a positive
    /// finite number or the headline cap is zero.
    pub fn validate(&self) -> Result<(), VerdeError> {
        if !self.decay_days.is_finite() || self.decay_days <= 0.0 {
            return Err(VerdeError::Config(format!(
                "news decay_days must be positive and finite, got {}",
                self.decay_days
            )));
        }
        if self.max_headlines == 0 {
            return Err(VerdeError::Config(
                "news max_headlines must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// ESG tilt applied to expected returns before max-Sharpe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Composite score below which a ticker is penalized (strict `<`).
    pub threshold: f64,
    /// Multiplier applied to a penalized ticker's expected return.
    pub penalty: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            penalty: 0.8,
        }
    }
}

impl TiltConfig {
    /// Check threshold and penalty ranges.
    ///
    /// # Errors
    /// Returns [`VerdeError::Config`] when the threshold leaves `[0, 1]` or
    /// the penalty leaves `(0, 1]`.
    pub fn validate(&self) -> Result<(), VerdeError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(VerdeError::Config(format!(
                "tilt threshold must lie in [0, 1], got {}",
                self.threshold
            )));
        }
        if !self.penalty.is_finite() || self.penalty <= 0.0 || self.penalty > 1.0 {
            return Err(VerdeError::Config(format!(
                "tilt penalty must lie in (0, 1], got {}",
                self.penalty
            )));
        }
        Ok(())
    }
}

/// Per-asset weight bounds for the frontier solver. Long-only: the lower
/// bound may not be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBounds {
    /// Lower bound per asset.
    pub min: f64,
    /// Upper bound per asset.
    pub max: f64,
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl WeightBounds {
    /// Check bound ordering and range.
    ///
    /// # Errors
    /// Returns [`VerdeError::Config`] unless `0 <= min < max <= 1`.
    pub fn validate(&self) -> Result<(), VerdeError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min < self.max
            && self.max <= 1.0;
        if ok {
            Ok(())
        } else {
            Err(VerdeError::Config(format!(
                "weight bounds must satisfy 0 <= min < max <= 1, got [{}, {}]",
                self.min, self.max
            )))
        }
    }
}

/// Global configuration for the `Verde` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdeConfig {
    /// Fusion weights across signal families.
    pub pillar_weights: PillarWeights,
    /// News recency weighting.
    pub news: NewsConfig,
    /// ESG tilt on expected returns.
    pub tilt: TiltConfig,
    /// Per-asset weight bounds for the solver.
    pub bounds: WeightBounds,
    /// Annualized risk-free rate used by max-Sharpe and reporting.
    pub risk_free_rate: f64,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for fan-out aggregations. If set, batch
    /// operations that aggregate multiple provider calls are bounded by it.
    pub request_timeout: Option<Duration>,
}

impl Default for VerdeConfig {
    fn default() -> Self {
        Self {
            pillar_weights: PillarWeights::default(),
            news: NewsConfig::default(),
            tilt: TiltConfig::default(),
            bounds: WeightBounds::default(),
            risk_free_rate: 0.02,
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

impl VerdeConfig {
    /// Validate every section. The facade builder calls this before any
    /// provider is consulted, so a bad configuration never reaches the
    /// pipeline.
    ///
    /// # Errors
    /// Returns the first [`VerdeError::Config`] found.
    pub fn validate(&self) -> Result<(), VerdeError> {
        self.pillar_weights.validate()?;
        self.news.validate()?;
        self.tilt.validate()?;
        self.bounds.validate()?;
        if !self.risk_free_rate.is_finite() {
            return Err(VerdeError::Config(format!(
                "risk-free rate must be finite, got {}",
                self.risk_free_rate
            )));
        }
        Ok(())
    }
}
