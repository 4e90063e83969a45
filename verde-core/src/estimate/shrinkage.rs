//! Ledoit-Wolf shrinkage toward the constant-variance target.

use nalgebra::DMatrix;

use crate::estimate::TRADING_DAYS_PER_YEAR;

/// Annualized Ledoit-Wolf covariance of a daily returns matrix (rows are
/// observations, columns assets).
///
/// The sample covariance is shrunk toward the scaled identity
/// `mean(var) * I` with the closed-form intensity from Ledoit & Wolf (2004):
/// the ratio of estimated sampling error to the sample dispersion around the
/// target, clamped into `[0, 1]`. Noisy, short histories shrink hard; long
/// clean ones barely move.
pub(crate) fn ledoit_wolf(returns: &DMatrix<f64>) -> DMatrix<f64> {
    let n = returns.nrows();
    let p = returns.ncols();

    let mut centered = returns.clone();
    for mut column in centered.column_iter_mut() {
        let mean = column.mean();
        column.add_scalar_mut(-mean);
    }

    let sample = (centered.transpose() * &centered) / n as f64;
    let prior_scale = sample.trace() / p as f64;

    let mut dispersion = sample.clone();
    for i in 0..p {
        dispersion[(i, i)] -= prior_scale;
    }
    let d2 = dispersion.norm_squared() / p as f64;

    let mut b2 = 0.0;
    for k in 0..n {
        let row = centered.row(k);
        let outer = DMatrix::from_fn(p, p, |i, j| row[i] * row[j]);
        b2 += (outer - &sample).norm_squared();
    }
    b2 /= (n * n) as f64 * p as f64;

    let shrinkage = if d2 > 0.0 {
        (b2 / d2).clamp(0.0, 1.0)
    } else {
        // Sample already equals the target; nothing to shrink.
        0.0
    };

    let mut shrunk = sample * (1.0 - shrinkage);
    for i in 0..p {
        shrunk[(i, i)] += shrinkage * prior_scale;
    }
    shrunk * TRADING_DAYS_PER_YEAR
}
