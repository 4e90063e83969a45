//! Constrained frontier solvers and weight cleaning.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};

use crate::optimize::projection::project_capped_simplex;
use crate::types::{PortfolioWeights, Ticker, VerdeError, WeightBounds};

/// Iteration budget for both solvers.
const MAX_ITERATIONS: usize = 10_000;

/// Iterate-shift threshold at which a solver declares convergence.
const CONVERGENCE_TOL: f64 = 1e-9;

/// Step halvings attempted by the max-Sharpe line search per iteration.
const BACKTRACK_STEPS: usize = 60;

/// Weights below this flush to zero in [`clean`].
const CLEAN_CUTOFF: f64 = 1e-4;

const MODE_MAX_SHARPE: &str = "max-sharpe";
const MODE_MIN_VOLATILITY: &str = "min-volatility";

/// Maximize the Sharpe ratio `(muᵀw - rf) / sqrt(wᵀ Σ w)` over the bounded
/// simplex `{ lo <= w_i <= hi, Σ w = 1 }`.
///
/// Projected gradient ascent with a backtracking line search, started from
/// the projected equal-weight vector. Deterministic: fixed initialization,
/// no randomized restarts. The objective is pseudoconcave on the feasible
/// set once Σ is positive definite, so a point admitting no ascent step is
/// the constrained optimum.
///
/// # Errors
/// Returns [`VerdeError::Optimization`] (mode `max-sharpe`) on non-finite
/// inputs, bounds that cannot sum to 1, a covariance that is not positive
/// definite, no expected return above the risk-free rate, or a spent
/// iteration budget.
pub fn max_sharpe(
    mu: &DVector<f64>,
    sigma: &DMatrix<f64>,
    risk_free_rate: f64,
    bounds: WeightBounds,
) -> Result<DVector<f64>, VerdeError> {
    let n = check_inputs(MODE_MAX_SHARPE, Some(mu), sigma, bounds)?;
    if !risk_free_rate.is_finite() {
        return Err(VerdeError::optimization(
            MODE_MAX_SHARPE,
            format!("risk-free rate must be finite, got {risk_free_rate}"),
        ));
    }
    if sigma.clone().cholesky().is_none() {
        return Err(VerdeError::optimization(
            MODE_MAX_SHARPE,
            "covariance matrix is not positive definite",
        ));
    }
    if mu.max() <= risk_free_rate {
        return Err(VerdeError::optimization(
            MODE_MAX_SHARPE,
            format!("no expected return exceeds the risk-free rate {risk_free_rate}"),
        ));
    }

    let equal = DVector::from_element(n, 1.0 / n as f64);
    let mut weights = project_capped_simplex(&equal, bounds);
    let mut best = sharpe(&weights, mu, sigma, risk_free_rate);
    for _ in 0..MAX_ITERATIONS {
        let gradient = sharpe_gradient(&weights, mu, sigma, risk_free_rate);
        let mut accepted = None;
        let mut step = 1.0;
        for _ in 0..BACKTRACK_STEPS {
            let candidate = project_capped_simplex(&(&weights + &gradient * step), bounds);
            let value = sharpe(&candidate, mu, sigma, risk_free_rate);
            if value > best {
                accepted = Some((candidate, value));
                break;
            }
            step /= 2.0;
        }
        let Some((candidate, value)) = accepted else {
            // No step length improves the objective: constrained optimum.
            return Ok(weights);
        };
        let shift = (&candidate - &weights).amax();
        weights = candidate;
        best = value;
        if shift < CONVERGENCE_TOL {
            return Ok(weights);
        }
    }
    Err(VerdeError::optimization(
        MODE_MAX_SHARPE,
        format!("no convergence within {MAX_ITERATIONS} iterations"),
    ))
}

/// Minimize portfolio variance `wᵀ Σ w` over the bounded simplex.
///
/// Fixed-step projected gradient descent; the step `1 / (2 ||Σ||_F)` never
/// overshoots because the Frobenius norm bounds the spectral radius. Unlike
/// [`max_sharpe`] this accepts a singular (positive semi-definite)
/// covariance: the objective stays convex, and the fallback mode has to
/// keep working exactly when the covariance degenerates.
///
/// # Errors
/// Returns [`VerdeError::Optimization`] (mode `min-volatility`) on
/// non-finite inputs, bounds that cannot sum to 1, or a spent iteration
/// budget.
pub fn min_volatility(
    sigma: &DMatrix<f64>,
    bounds: WeightBounds,
) -> Result<DVector<f64>, VerdeError> {
    let n = check_inputs(MODE_MIN_VOLATILITY, None, sigma, bounds)?;
    let lipschitz = 2.0 * sigma.norm();
    let step = if lipschitz > 0.0 { 1.0 / lipschitz } else { 1.0 };

    let equal = DVector::from_element(n, 1.0 / n as f64);
    let mut weights = project_capped_simplex(&equal, bounds);
    for _ in 0..MAX_ITERATIONS {
        let gradient = (sigma * &weights) * 2.0;
        let candidate = project_capped_simplex(&(&weights - gradient * step), bounds);
        let shift = (&candidate - &weights).amax();
        weights = candidate;
        if shift < CONVERGENCE_TOL {
            return Ok(weights);
        }
    }
    Err(VerdeError::optimization(
        MODE_MIN_VOLATILITY,
        format!("no convergence within {MAX_ITERATIONS} iterations"),
    ))
}

/// Zero out dust weights and renormalize the survivors to sum exactly 1.
///
/// Entries below `1e-4` flush to zero. Every ticker stays present in the
/// output, zeros included, so reports always cover the whole universe.
/// `tickers[i]` pairs with `raw[i]`.
#[must_use]
pub fn clean(tickers: &[Ticker], raw: &DVector<f64>) -> PortfolioWeights {
    debug_assert_eq!(tickers.len(), raw.len());
    let kept: f64 = raw.iter().filter(|&&w| w >= CLEAN_CUTOFF).sum();
    let weights: BTreeMap<Ticker, f64> = tickers
        .iter()
        .zip(raw.iter())
        .map(|(ticker, &w)| {
            let cleaned = if w < CLEAN_CUTOFF || kept <= 0.0 {
                0.0
            } else {
                w / kept
            };
            (ticker.clone(), cleaned)
        })
        .collect();
    PortfolioWeights::from_map(weights)
}

fn sharpe(weights: &DVector<f64>, mu: &DVector<f64>, sigma: &DMatrix<f64>, rf: f64) -> f64 {
    let excess = mu.dot(weights) - rf;
    let variance = weights.dot(&(sigma * weights));
    excess / variance.sqrt()
}

fn sharpe_gradient(
    weights: &DVector<f64>,
    mu: &DVector<f64>,
    sigma: &DMatrix<f64>,
    rf: f64,
) -> DVector<f64> {
    let sigma_w = sigma * weights;
    let variance = weights.dot(&sigma_w);
    let volatility = variance.sqrt();
    let excess = mu.dot(weights) - rf;
    mu * (1.0 / volatility) - sigma_w * (excess / (variance * volatility))
}

fn check_inputs(
    mode: &str,
    mu: Option<&DVector<f64>>,
    sigma: &DMatrix<f64>,
    bounds: WeightBounds,
) -> Result<usize, VerdeError> {
    let n = sigma.nrows();
    if n == 0 || sigma.ncols() != n {
        return Err(VerdeError::optimization(
            mode,
            format!(
                "covariance must be square and non-empty, got {}x{}",
                sigma.nrows(),
                sigma.ncols()
            ),
        ));
    }
    if sigma.iter().any(|v| !v.is_finite()) {
        return Err(VerdeError::optimization(
            mode,
            "covariance contains non-finite values",
        ));
    }
    if let Some(mu) = mu {
        if mu.len() != n {
            return Err(VerdeError::optimization(
                mode,
                format!("expected returns have length {}, covariance is {n}x{n}", mu.len()),
            ));
        }
        if mu.iter().any(|v| !v.is_finite()) {
            return Err(VerdeError::optimization(
                mode,
                "expected returns contain non-finite values",
            ));
        }
    }
    if bounds.min * n as f64 > 1.0 || bounds.max * (n as f64) < 1.0 {
        return Err(VerdeError::optimization(
            mode,
            format!(
                "bounds [{}, {}] cannot reach total weight 1 across {n} asset(s)",
                bounds.min, bounds.max
            ),
        ));
    }
    Ok(n)
}
