use std::collections::BTreeMap;

use verde_core::{Capability, DateSpan, PriceSeries, Ticker, VerdeError};

use crate::Verde;

impl Verde {
    /// Fetch daily closes for one ticker within `span`.
    ///
    /// Behavior and trade-offs:
    /// - Tries connectors in registration order with the per-provider timeout
    ///   applied to each attempt; the first success wins.
    /// - A connector that does not know the ticker returns `NotFound`; a
    ///   connector that knows it but has no rows in the span returns an empty
    ///   series. The two remain distinguishable to the caller.
    ///
    /// # Errors
    /// Returns `NotFound` when every capable connector reported the ticker
    /// unknown, `AllProvidersTimedOut` / `AllProvidersFailed` on uniform or
    /// mixed faults, and `Unsupported` when no connector has the capability.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "verde::router", skip(self), fields(ticker = %ticker)),
    )]
    pub async fn price_history(
        &self,
        ticker: &Ticker,
        span: DateSpan,
    ) -> Result<PriceSeries, VerdeError> {
        self.fetch_first(ticker, Capability::PriceHistory, "price history", |c| {
            if c.as_price_history_provider().is_none() {
                return None;
            }
            let t = ticker.clone();
            Some(async move {
                match c.as_price_history_provider() {
                    Some(p) => p.price_history(&t, span).await,
                    None => Err(VerdeError::connector(
                        c.name(),
                        "missing price-history capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Fan price fetches out over the universe and collect them per ticker.
    ///
    /// Unlike signal collection this is fallible: the estimator needs every
    /// series, so the first per-ticker failure (in input order) fails the
    /// batch.
    pub(crate) async fn collect_histories(
        &self,
        tickers: &[Ticker],
        span: DateSpan,
    ) -> Result<BTreeMap<Ticker, PriceSeries>, VerdeError> {
        let tasks = tickers.iter().map(|ticker| async move {
            let series = self.price_history(ticker, span).await?;
            Ok::<_, VerdeError>((ticker.clone(), series))
        });

        let mut history = BTreeMap::new();
        for fetched in futures::future::join_all(tasks).await {
            let (ticker, series) = fetched?;
            history.insert(ticker, series);
        }
        Ok(history)
    }
}
