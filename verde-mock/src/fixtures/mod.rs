//! Deterministic fixture generation, seeded per ticker and capability.

pub mod filings;
pub mod news;
pub mod prices;
pub mod sustainability;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use verde_core::Ticker;

/// Derive a stable RNG seed for one ticker and capability domain.
///
/// Mixing the domain keeps the per-capability streams independent: asking
/// for news must not perturb the sustainability scores a test pinned down.
pub(crate) fn ticker_seed(seed: u64, ticker: &Ticker, domain: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    ticker.hash(&mut hasher);
    domain.hash(&mut hasher);
    hasher.finish()
}
