#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{Duration, sleep};
use verde_core::connector::{
    FilingProvider, NewsProvider, PriceHistoryProvider, SustainabilityProvider,
};
use verde_core::{
    DateSpan, Headline, PartialPillarScore, PriceSeries, Ticker, VerdeConnector, VerdeError,
};

/// Simple in-memory connector used by integration tests.
/// Behavior per capability comes from the optional closures below; a
/// capability without a closure is not advertised at all.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,

    pub sustainability_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<PartialPillarScore, VerdeError> + Send + Sync>>,
    pub news_fn:
        Option<Arc<dyn Fn(&Ticker, usize) -> Result<Vec<Headline>, VerdeError> + Send + Sync>>,
    pub filing_fn: Option<Arc<dyn Fn(&Ticker) -> Result<Option<String>, VerdeError> + Send + Sync>>,
    pub price_history_fn:
        Option<Arc<dyn Fn(&Ticker, DateSpan) -> Result<PriceSeries, VerdeError> + Send + Sync>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,
            sustainability_fn: None,
            news_fn: None,
            filing_fn: None,
            price_history_fn: None,
        }
    }
}

#[async_trait]
impl SustainabilityProvider for MockConnector {
    async fn sustainability(&self, ticker: &Ticker) -> Result<PartialPillarScore, VerdeError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.sustainability_fn {
            return (f)(ticker);
        }
        Err(VerdeError::unsupported("sustainability"))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &Ticker, limit: usize) -> Result<Vec<Headline>, VerdeError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.news_fn {
            return (f)(ticker, limit);
        }
        Err(VerdeError::unsupported("news"))
    }
}

#[async_trait]
impl FilingProvider for MockConnector {
    async fn filing(&self, ticker: &Ticker) -> Result<Option<String>, VerdeError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.filing_fn {
            return (f)(ticker);
        }
        Err(VerdeError::unsupported("filing"))
    }
}

#[async_trait]
impl PriceHistoryProvider for MockConnector {
    async fn price_history(
        &self,
        ticker: &Ticker,
        span: DateSpan,
    ) -> Result<PriceSeries, VerdeError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.price_history_fn {
            return (f)(ticker, span);
        }
        Err(VerdeError::unsupported("price-history"))
    }
}

impl VerdeConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "test"
    }

    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        if self.sustainability_fn.is_some() {
            Some(self as &dyn SustainabilityProvider)
        } else {
            None
        }
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        if self.news_fn.is_some() {
            Some(self as &dyn NewsProvider)
        } else {
            None
        }
    }

    fn as_filing_provider(&self) -> Option<&dyn FilingProvider> {
        if self.filing_fn.is_some() {
            Some(self as &dyn FilingProvider)
        } else {
            None
        }
    }

    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        if self.price_history_fn.is_some() {
            Some(self as &dyn PriceHistoryProvider)
        } else {
            None
        }
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    sustainability_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<PartialPillarScore, VerdeError> + Send + Sync>>,
    news_fn:
        Option<Arc<dyn Fn(&Ticker, usize) -> Result<Vec<Headline>, VerdeError> + Send + Sync>>,
    filing_fn: Option<Arc<dyn Fn(&Ticker) -> Result<Option<String>, VerdeError> + Send + Sync>>,
    price_history_fn:
        Option<Arc<dyn Fn(&Ticker, DateSpan) -> Result<PriceSeries, VerdeError> + Send + Sync>>,
}

impl Default for MockConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            sustainability_fn: None,
            news_fn: None,
            filing_fn: None,
            price_history_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Make every provider call sleep this long before answering.
    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn on_sustainability<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<PartialPillarScore, VerdeError> + Send + Sync + 'static,
    {
        self.sustainability_fn = Some(Arc::new(f));
        self
    }

    pub fn on_news<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker, usize) -> Result<Vec<Headline>, VerdeError> + Send + Sync + 'static,
    {
        self.news_fn = Some(Arc::new(f));
        self
    }

    pub fn on_filing<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<Option<String>, VerdeError> + Send + Sync + 'static,
    {
        self.filing_fn = Some(Arc::new(f));
        self
    }

    pub fn on_price_history<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker, DateSpan) -> Result<PriceSeries, VerdeError> + Send + Sync + 'static,
    {
        self.price_history_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_sustainability_ok(self, partial: PartialPillarScore) -> Self {
        self.on_sustainability(move |_| Ok(partial))
    }

    pub fn returns_news_ok(self, headlines: Vec<Headline>) -> Self {
        self.on_news(move |_, limit| Ok(headlines.iter().take(limit).cloned().collect()))
    }

    pub fn returns_filing_ok(self, filing: Option<String>) -> Self {
        self.on_filing(move |_| Ok(filing.clone()))
    }

    pub fn returns_prices_ok(self, series: PriceSeries) -> Self {
        self.on_price_history(move |_, _| Ok(series.clone()))
    }

    /// Advertise all three signal capabilities with quiet, healthy answers:
    /// no structured coverage, no headlines, no filing on record.
    pub fn quiet_signals(self) -> Self {
        self.on_sustainability(|_| Ok(PartialPillarScore::default()))
            .on_news(|_, _| Ok(vec![]))
            .on_filing(|_| Ok(None))
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            sustainability_fn: self.sustainability_fn,
            news_fn: self.news_fn,
            filing_fn: self.filing_fn,
            price_history_fn: self.price_history_fn,
        })
    }
}
