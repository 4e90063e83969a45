//! Report envelopes produced by the facade.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::VerdeError;
use crate::signal::NormalizedEsgScore;
use crate::ticker::Ticker;

/// How the final portfolio was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PortfolioMode {
    /// Max-Sharpe on ESG-tilted expected returns.
    EsgAware,
    /// Min-volatility after the ESG-aware attempt failed.
    Fallback,
}

impl PortfolioMode {
    /// Stable, kebab-case identifier for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EsgAware => "esg-aware",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for PortfolioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cleaned portfolio weights keyed by ticker.
///
/// Entries are non-negative and sum to 1 within solver tolerance;
/// sub-threshold positions are already zeroed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWeights {
    weights: BTreeMap<Ticker, f64>,
}

impl PortfolioWeights {
    /// Build from a ticker-keyed map.
    #[must_use]
    pub fn from_map(weights: BTreeMap<Ticker, f64>) -> Self {
        Self { weights }
    }

    /// Weight for one ticker; absent entries weigh 0.
    #[must_use]
    pub fn get(&self, ticker: &Ticker) -> f64 {
        self.weights.get(ticker).copied().unwrap_or(0.0)
    }

    /// Iterate entries in ticker order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, f64)> {
        self.weights.iter().map(|(t, w)| (t, *w))
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Consume into the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<Ticker, f64> {
        self.weights
    }
}

/// Annualized performance of a weight vector against the raw (untilted)
/// estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    /// Annualized expected return.
    pub expected_return: f64,
    /// Annualized volatility.
    pub volatility: f64,
    /// Sharpe ratio at the configured risk-free rate.
    pub sharpe: f64,
}

/// Summary of signal collection and scoring across a peer group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Normalized per-ticker scores.
    pub scores: BTreeMap<Ticker, NormalizedEsgScore>,
    /// Non-fatal issues recovered during collection: per-source gaps,
    /// timeouts, and connector faults degraded to neutral defaults.
    pub warnings: Vec<VerdeError>,
}

/// Summary of a full portfolio construction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Normalized per-ticker scores the tilt was based on.
    pub scores: BTreeMap<Ticker, NormalizedEsgScore>,
    /// Cleaned portfolio weights.
    pub weights: PortfolioWeights,
    /// Performance of the weights against the untilted estimates.
    pub performance: PortfolioPerformance,
    /// Which attempt produced the portfolio.
    pub mode: PortfolioMode,
    /// Non-fatal issues, including the failed ESG-aware attempt when the
    /// fallback produced the result.
    pub warnings: Vec<VerdeError>,
}
