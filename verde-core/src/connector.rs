use async_trait::async_trait;

use crate::types::{DateSpan, Headline, PartialPillarScore, PriceSeries, Ticker, VerdeError};

/// Focused role trait for connectors that provide structured sustainability
/// pillar scores.
#[async_trait]
pub trait SustainabilityProvider: Send + Sync {
    /// Fetch pillar scores for the given ticker, already mapped into `[0, 1]`.
    ///
    /// Pillars the vendor does not cover stay `None`; a vendor with no
    /// sustainability coverage at all for a known ticker returns the empty
    /// partial. `Err` is reserved for real faults (transport, auth, quota),
    /// not for absent data.
    async fn sustainability(&self, ticker: &Ticker) -> Result<PartialPillarScore, VerdeError>;
}

/// Focused role trait for connectors that provide dated news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `limit` recent headlines for the given ticker, most
    /// recent first. An empty vector is a valid answer for a quiet ticker.
    async fn news(&self, ticker: &Ticker, limit: usize) -> Result<Vec<Headline>, VerdeError>;
}

/// Focused role trait for connectors that provide long-form sustainability
/// disclosures.
#[async_trait]
pub trait FilingProvider: Send + Sync {
    /// Fetch the text of the ticker's most recent sustainability disclosure.
    ///
    /// `Ok(None)` means the ticker has never filed one, which is common and
    /// valid; `Err` is reserved for real faults.
    async fn filing(&self, ticker: &Ticker) -> Result<Option<String>, VerdeError>;
}

/// Focused role trait for connectors that provide historical closes.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch daily closes for the given ticker within `span`, oldest first.
    ///
    /// An unknown ticker is `Err(NotFound)`; a known ticker with no rows in
    /// the requested range is `Ok` with an empty series. The two cases are
    /// distinguishable by contract.
    async fn price_history(
        &self,
        ticker: &Ticker,
        span: DateSpan,
    ) -> Result<PriceSeries, VerdeError>;
}

/// The primary connector interface: a pluggable data source.
///
/// Connectors implement the focused role traits above for the capabilities
/// they actually have, then advertise each one by overriding the matching
/// `as_*_provider` accessor to return `Some(self)`. Every accessor defaults
/// to `None`, so a connector only ever opts in. The facade routes a request
/// to a connector only when the accessor reports the capability, trying
/// connectors in registration order and accumulating failures.
pub trait VerdeConnector: Send + Sync {
    /// A stable identifier used for error tagging (e.g., "verde-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise sustainability capability by returning a usable trait
    /// object reference when supported.
    fn as_sustainability_provider(&self) -> Option<&dyn SustainabilityProvider> {
        None
    }

    /// Advertise news capability by returning a usable trait object
    /// reference when supported.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }

    /// Advertise filing capability by returning a usable trait object
    /// reference when supported.
    fn as_filing_provider(&self) -> Option<&dyn FilingProvider> {
        None
    }

    /// Advertise price-history capability by returning a usable trait
    /// object reference when supported.
    fn as_price_history_provider(&self) -> Option<&dyn PriceHistoryProvider> {
        None
    }
}
