//! Seeded geometric random-walk price fixtures.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use verde_core::{DateSpan, PricePoint, PriceSeries, Ticker};

use crate::fixtures::ticker_seed;

/// Close used for every observation of the `FLAT` ticker.
const FLAT_CLOSE: f64 = 100.0;

/// Generate a daily close series covering every date in `span`.
///
/// A seeded geometric walk: per-ticker starting level and drift, bounded
/// daily shocks, so closes stay positive for any span length. `FLAT` pins
/// every close to the same level, giving the ticker a degenerate return
/// column.
pub fn by_ticker(seed: u64, ticker: &Ticker, span: DateSpan) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(ticker_seed(seed, ticker, "prices"));
    let flat = ticker.as_str() == "FLAT";
    let mut close = if flat {
        FLAT_CLOSE
    } else {
        rng.random_range(20.0..=250.0)
    };
    let drift = rng.random_range(-0.0002..=0.001);

    let mut points = Vec::new();
    let mut day = span.start();
    while day <= span.end() {
        points.push(PricePoint { date: day, close });
        if !flat {
            let shock = rng.random_range(-0.02..=0.02);
            close *= 1.0 + drift + shock;
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    PriceSeries::new(points).expect("walk produces increasing dates and positive closes")
}
