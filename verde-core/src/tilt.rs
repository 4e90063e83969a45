//! ESG tilt on expected returns.

use std::collections::BTreeMap;

use nalgebra::DVector;

use crate::types::{NormalizedEsgScore, TiltConfig, Ticker};

/// Composite assumed for a ticker with no normalized score.
const UNSCORED_COMPOSITE: f64 = 0.5;

/// Penalize the expected returns of tickers whose ESG composite falls below
/// the configured threshold.
///
/// A ticker with composite strictly below `cfg.threshold` has its expected
/// return multiplied by `cfg.penalty`; at or above the threshold it is left
/// untouched. Tickers absent from `scores` are treated as sitting exactly at
/// the neutral composite of 0.5. `tickers[i]` pairs with `mu[i]`; order is
/// preserved.
///
/// Pure; never errors.
#[must_use]
pub fn tilt(
    mu: &DVector<f64>,
    tickers: &[Ticker],
    scores: &BTreeMap<Ticker, NormalizedEsgScore>,
    cfg: &TiltConfig,
) -> DVector<f64> {
    debug_assert_eq!(mu.len(), tickers.len());
    DVector::from_iterator(
        mu.len(),
        mu.iter().zip(tickers).map(|(&expected, ticker)| {
            let composite = scores
                .get(ticker)
                .map_or(UNSCORED_COMPOSITE, NormalizedEsgScore::composite);
            if composite < cfg.threshold {
                expected * cfg.penalty
            } else {
                expected
            }
        }),
    )
}
