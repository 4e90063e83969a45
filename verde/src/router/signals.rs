use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use verde_core::{
    Capability, Headline, NormalizedEsgScore, PartialPillarScore, PillarScore, RawSignalBundle,
    SignalReport, Ticker, VerdeError, aggregate_headlines, fuse, normalize, score_document,
};

use crate::Verde;
use crate::router::util;

impl Verde {
    /// Collect, score, fuse, and normalize ESG signals for a peer group.
    ///
    /// Behavior and trade-offs:
    /// - The three signal sources of each ticker are fetched concurrently,
    ///   and tickers fan out concurrently; headline recency is measured back
    ///   from `as_of`.
    /// - A failing or timed-out source degrades that ticker's contribution
    ///   to neutral and is recorded in `warnings`; it never fails the batch.
    ///   Absent-but-healthy data (no coverage, no filing, a quiet news feed)
    ///   resolves to neutral silently.
    /// - Normalization is a barrier: scores are min-max scaled per pillar
    ///   across exactly this request's universe, so the same ticker can
    ///   normalize differently in a different peer group. A pillar with no
    ///   spread normalizes to 0.5 for everyone.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty or duplicate-carrying universe, and
    /// `RequestTimeout` when the configured overall deadline expires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "verde::router",
            skip(self, tickers),
            fields(universe = tickers.len()),
        )
    )]
    pub async fn esg_scores(
        &self,
        tickers: &[Ticker],
        as_of: DateTime<Utc>,
    ) -> Result<SignalReport, VerdeError> {
        util::validate_universe(tickers, 1)?;

        let (scores, warnings) = crate::core::with_request_deadline(
            self.cfg.request_timeout,
            self.collect_signals(tickers, as_of),
        )
        .await
        .map_err(|e| util::relabel_request_timeout(e, "esg-scores"))?;

        Ok(SignalReport { scores, warnings })
    }

    /// Fan out signal collection over the universe, then fuse and normalize.
    ///
    /// Infallible by design: every per-source fault has already been resolved
    /// to a neutral contribution and a warning by the time fusion runs.
    pub(crate) async fn collect_signals(
        &self,
        tickers: &[Ticker],
        as_of: DateTime<Utc>,
    ) -> (BTreeMap<Ticker, NormalizedEsgScore>, Vec<VerdeError>) {
        let tasks = tickers.iter().map(|ticker| self.ticker_bundle(ticker, as_of));
        let bundles = futures::future::join_all(tasks).await;

        let mut fused = BTreeMap::new();
        let mut warnings = Vec::new();
        for (ticker, bundle, mut degraded) in bundles {
            fused.insert(ticker, fuse(&bundle, &self.cfg.pillar_weights));
            warnings.append(&mut degraded);
        }

        (normalize(&fused), warnings)
    }

    /// Fetch and score one ticker's three signal sources concurrently.
    async fn ticker_bundle(
        &self,
        ticker: &Ticker,
        as_of: DateTime<Utc>,
    ) -> (Ticker, RawSignalBundle, Vec<VerdeError>) {
        let (sustainability, news, filing) = tokio::join!(
            self.fetch_sustainability(ticker),
            self.fetch_news(ticker),
            self.fetch_filing(ticker),
        );

        let mut warnings = Vec::new();

        let sustainability = match sustainability {
            Ok(partial) => partial,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "verde::router",
                    ticker = %ticker,
                    capability = %Capability::Sustainability,
                    error = %e,
                    "signal source degraded to neutral",
                );
                warnings.push(e);
                PartialPillarScore::default()
            }
        };

        let news = match news {
            Ok(headlines) => aggregate_headlines(&headlines, as_of, &self.cfg.news),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "verde::router",
                    ticker = %ticker,
                    capability = %Capability::News,
                    error = %e,
                    "signal source degraded to neutral",
                );
                warnings.push(e);
                PillarScore::NEUTRAL
            }
        };

        let filing = match filing {
            Ok(Some(text)) => score_document(&text),
            Ok(None) => PillarScore::NEUTRAL,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "verde::router",
                    ticker = %ticker,
                    capability = %Capability::Filing,
                    error = %e,
                    "signal source degraded to neutral",
                );
                warnings.push(e);
                PillarScore::NEUTRAL
            }
        };

        (
            ticker.clone(),
            RawSignalBundle {
                sustainability,
                news,
                filing,
            },
            warnings,
        )
    }

    async fn fetch_sustainability(
        &self,
        ticker: &Ticker,
    ) -> Result<PartialPillarScore, VerdeError> {
        self.fetch_first(
            ticker,
            Capability::Sustainability,
            "sustainability data",
            |c| {
                if c.as_sustainability_provider().is_none() {
                    return None;
                }
                let t = ticker.clone();
                Some(async move {
                    match c.as_sustainability_provider() {
                        Some(p) => p.sustainability(&t).await,
                        None => Err(VerdeError::connector(
                            c.name(),
                            "missing sustainability capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }

    async fn fetch_news(&self, ticker: &Ticker) -> Result<Vec<Headline>, VerdeError> {
        let limit = self.cfg.news.max_headlines;
        self.fetch_first(ticker, Capability::News, "news", |c| {
            if c.as_news_provider().is_none() {
                return None;
            }
            let t = ticker.clone();
            Some(async move {
                match c.as_news_provider() {
                    Some(p) => p.news(&t, limit).await,
                    None => Err(VerdeError::connector(
                        c.name(),
                        "missing news capability during call",
                    )),
                }
            })
        })
        .await
    }

    async fn fetch_filing(&self, ticker: &Ticker) -> Result<Option<String>, VerdeError> {
        self.fetch_first(ticker, Capability::Filing, "filing", |c| {
            if c.as_filing_provider().is_none() {
                return None;
            }
            let t = ticker.clone();
            Some(async move {
                match c.as_filing_provider() {
                    Some(p) => p.filing(&t).await,
                    None => Err(VerdeError::connector(
                        c.name(),
                        "missing filing capability during call",
                    )),
                }
            })
        })
        .await
    }
}
