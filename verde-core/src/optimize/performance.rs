//! Annualized performance of a weight vector.

use nalgebra::{DMatrix, DVector};

use crate::types::PortfolioPerformance;

/// Annualized performance of `weights` against the given estimates.
///
/// Reports `muᵀw`, `sqrt(wᵀ Σ w)`, and the Sharpe ratio at the given
/// risk-free rate. A zero-volatility portfolio reports a Sharpe of zero
/// rather than a division artifact.
#[must_use]
pub fn performance(
    weights: &DVector<f64>,
    mu: &DVector<f64>,
    sigma: &DMatrix<f64>,
    risk_free_rate: f64,
) -> PortfolioPerformance {
    let expected_return = mu.dot(weights);
    let variance = weights.dot(&(sigma * weights));
    let volatility = variance.max(0.0).sqrt();
    let sharpe = if volatility > 0.0 {
        (expected_return - risk_free_rate) / volatility
    } else {
        0.0
    };
    PortfolioPerformance {
        expected_return,
        volatility,
        sharpe,
    }
}
