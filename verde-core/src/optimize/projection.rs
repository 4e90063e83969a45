//! Euclidean projection onto the bounded simplex.

use nalgebra::DVector;

use crate::types::WeightBounds;

/// Bisection iterations for the clamp shift; 64 halvings put the bracket
/// far below f64 resolution.
const BISECTION_ITERS: usize = 64;

/// Euclidean projection of `v` onto `{ w : Σ w = 1, lo <= w_i <= hi }`.
///
/// The projection has the form `clamp(v + θ, lo, hi)` for a scalar shift θ;
/// the clamped total is continuous and monotone in θ, so θ is found by
/// bisection. Callers must have checked feasibility (`n·lo <= 1 <= n·hi`)
/// beforehand, otherwise no shift can reach a total of 1.
pub(crate) fn project_capped_simplex(v: &DVector<f64>, bounds: WeightBounds) -> DVector<f64> {
    let clamped_total = |shift: f64| -> f64 {
        v.iter()
            .map(|x| (x + shift).clamp(bounds.min, bounds.max))
            .sum()
    };
    // At `lo` everything clamps to the lower bound, at `hi` to the upper,
    // so the root is bracketed.
    let mut lo = bounds.min - v.max();
    let mut hi = bounds.max - v.min();
    for _ in 0..BISECTION_ITERS {
        let mid = 0.5 * (lo + hi);
        if clamped_total(mid) < 1.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let shift = 0.5 * (lo + hi);
    DVector::from_iterator(
        v.len(),
        v.iter().map(|x| (x + shift).clamp(bounds.min, bounds.max)),
    )
}
