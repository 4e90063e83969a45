//! Seeded sustainability pillar fixtures.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use verde_core::{PartialPillarScore, Ticker};

use crate::fixtures::ticker_seed;

/// Generate pillar scores for a ticker.
///
/// Pillar ranges mirror typical vendor distributions: E in [0.30, 0.95],
/// S in [0.20, 0.90], G in [0.25, 0.92]. Roughly one ticker in five drops
/// one pillar to exercise the partial-coverage path; `NOESG` reports
/// nothing at all.
pub fn by_ticker(seed: u64, ticker: &Ticker) -> PartialPillarScore {
    if ticker.as_str() == "NOESG" {
        return PartialPillarScore::default();
    }
    let mut rng = StdRng::seed_from_u64(ticker_seed(seed, ticker, "sustainability"));
    let e = rng.random_range(0.30..=0.95);
    let s = rng.random_range(0.20..=0.90);
    let g = rng.random_range(0.25..=0.92);
    let gap = rng.random_range(0..10u32);
    PartialPillarScore {
        e: Some(e),
        s: if gap == 0 { None } else { Some(s) },
        g: if gap == 1 { None } else { Some(g) },
    }
}
