use std::sync::Arc;

use verde::{DateSpan, Ticker, VerdeConnector};

/// Return a connector for demos.
///
/// Demos always run against the seeded mock so they are deterministic and
/// never touch the network. Set `VERDE_DEMOS_SEED` to explore a different
/// generated universe.
#[must_use]
pub fn get_connector() -> Arc<dyn VerdeConnector> {
    match std::env::var("VERDE_DEMOS_SEED")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
    {
        Some(seed) => {
            println!("--- (Using mock connector with seed {seed}) ---");
            Arc::new(verde_mock::MockConnector::with_seed(seed))
        }
        None => Arc::new(verde_mock::MockConnector::new()),
    }
}

/// The universe shared by the demos: three covered names plus one with no
/// ESG coverage at all, to show the neutral path.
///
/// # Panics
/// Panics if a symbol fails validation, which cannot happen for these
/// constants.
#[must_use]
pub fn universe() -> Vec<Ticker> {
    ["ACME", "BONSAI", "UMBRA", "NOESG"]
        .into_iter()
        .map(|symbol| Ticker::new(symbol).expect("valid ticker symbol"))
        .collect()
}

/// First half of 2024, the span every demo prices over.
///
/// # Panics
/// Panics if the constant dates fail validation, which cannot happen.
#[must_use]
pub fn demo_span() -> DateSpan {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let end = chrono::NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date");
    DateSpan::new(start, end).expect("start precedes end")
}
