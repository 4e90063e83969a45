//! verde-mock
//!
//! A CI-safe connector that generates deterministic, seeded data for any
//! ticker: sustainability pillars, headlines, disclosures, and price walks.
//! Identical seeds produce identical data, so tests and examples never
//! depend on the network.
//!
//! Special tickers drive failure paths end to end:
//!
//! - `FAIL` — every provider call fails with a tagged connector error.
//! - `TIMEOUT` — every provider call hangs until the caller cancels it.
//! - `FLAT` — constant closes, a degenerate covariance column.
//! - `NOESG` — no sustainability, news, or filing coverage (all-neutral
//!   signal path); prices stay normal.
#![warn(missing_docs)]

use async_trait::async_trait;
use verde_core::connector::{
    FilingProvider, NewsProvider, PriceHistoryProvider, SustainabilityProvider, VerdeConnector,
};
use verde_core::{DateSpan, Headline, PartialPillarScore, PriceSeries, Ticker, VerdeError};

mod fixtures;

/// Seed used by [`MockConnector::new`].
pub const DEFAULT_SEED: u64 = 2025;

/// Deterministic mock connector; implements every provider capability.
pub struct MockConnector {
    seed: u64,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector generating from the default seed.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Connector generating from an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    async fn gate(ticker: &Ticker, capability: &'static str) -> Result<(), VerdeError> {
        match ticker.as_str() {
            "FAIL" => Err(VerdeError::connector(
                "verde-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Hang until the orchestrator's timeout cancels the call.
                std::future::pending::<()>().await;
                unreachable!()
            }
            _ => Ok(()),
        }
    }
}

impl VerdeConnector for MockConnector {
    fn name(&self) -> &'static str {
        "verde-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        Some(self as &dyn SustainabilityProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }

    fn as_filing_provider(&self) -> Option<&dyn FilingProvider> {
        Some(self as &dyn FilingProvider)
    }

    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        Some(self as &dyn PriceHistoryProvider)
    }
}

#[async_trait]
impl SustainabilityProvider for MockConnector {
    async fn sustainability(&self, ticker: &Ticker) -> Result<PartialPillarScore, VerdeError> {
        Self::gate(ticker, "sustainability").await?;
        Ok(fixtures::sustainability::by_ticker(self.seed, ticker))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &Ticker, limit: usize) -> Result<Vec<Headline>, VerdeError> {
        Self::gate(ticker, "news").await?;
        Ok(fixtures::news::by_ticker(self.seed, ticker, limit))
    }
}

#[async_trait]
impl FilingProvider for MockConnector {
    async fn filing(&self, ticker: &Ticker) -> Result<Option<String>, VerdeError> {
        Self::gate(ticker, "filing").await?;
        Ok(fixtures::filings::by_ticker(self.seed, ticker))
    }
}

#[async_trait]
impl PriceHistoryProvider for MockConnector {
    async fn price_history(
        &self,
        ticker: &Ticker,
        span: DateSpan,
    ) -> Result<PriceSeries, VerdeError> {
        Self::gate(ticker, "price-history").await?;
        Ok(fixtures::prices::by_ticker(self.seed, ticker, span))
    }
}
