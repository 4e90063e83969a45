//! Greedy conversion of target weights into whole-share purchases.

use std::collections::BTreeMap;

use crate::types::{PortfolioWeights, Ticker, VerdeError};

/// Result of converting target weights into whole shares.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteAllocation {
    /// Whole shares to buy per ticker; tickers that end up with zero shares
    /// are absent.
    pub shares: BTreeMap<Ticker, u64>,
    /// Cash left over after every purchase.
    pub leftover: f64,
}

/// Convert cleaned weights into whole-share purchases for a cash budget.
///
/// The first pass buys `floor(weight * total / price)` shares per weighted
/// ticker. Remaining cash then goes one share at a time to the ticker
/// furthest below its target value, skipping tickers that are no longer
/// affordable or already at target. Ties break toward the alphabetically
/// first ticker, keeping the result deterministic.
///
/// # Errors
/// Returns [`VerdeError::InvalidArg`] on a non-positive or non-finite
/// budget or price, and [`VerdeError::NotFound`] when a weighted ticker is
/// missing from `latest_prices`.
pub fn allocate(
    weights: &PortfolioWeights,
    latest_prices: &BTreeMap<Ticker, f64>,
    total: f64,
) -> Result<DiscreteAllocation, VerdeError> {
    if !total.is_finite() || total <= 0.0 {
        return Err(VerdeError::InvalidArg(format!(
            "allocation budget must be positive and finite, got {total}"
        )));
    }

    // (ticker, price, target value) per weighted position.
    let mut targets: Vec<(&Ticker, f64, f64)> = Vec::new();
    for (ticker, weight) in weights.iter() {
        if weight <= 0.0 {
            continue;
        }
        let Some(&price) = latest_prices.get(ticker) else {
            return Err(VerdeError::not_found(format!("latest price for {ticker}")));
        };
        if !price.is_finite() || price <= 0.0 {
            return Err(VerdeError::InvalidArg(format!(
                "latest price for {ticker} must be positive and finite, got {price}"
            )));
        }
        targets.push((ticker, price, weight * total));
    }

    let mut shares: BTreeMap<Ticker, u64> = BTreeMap::new();
    let mut spent: Vec<f64> = Vec::with_capacity(targets.len());
    let mut leftover = total;
    for &(ticker, price, target) in &targets {
        let count = (target / price).floor() as u64;
        if count > 0 {
            shares.insert(ticker.clone(), count);
        }
        let value = count as f64 * price;
        spent.push(value);
        leftover -= value;
    }

    loop {
        let mut pick: Option<usize> = None;
        let mut best_deficit = 0.0;
        for (idx, &(_, price, target)) in targets.iter().enumerate() {
            let deficit = target - spent[idx];
            if price <= leftover && deficit > best_deficit {
                best_deficit = deficit;
                pick = Some(idx);
            }
        }
        let Some(idx) = pick else { break };
        let (ticker, price, _) = targets[idx];
        *shares.entry(ticker.clone()).or_insert(0) += 1;
        spent[idx] += price;
        leftover -= price;
    }

    Ok(DiscreteAllocation { shares, leftover })
}
