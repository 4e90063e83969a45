use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use nalgebra::DVector;
use verde_core::{
    DateSpan, MarketEstimate, NormalizedEsgScore, PortfolioMode, PortfolioReport, Ticker,
    VerdeError, clean, estimate, max_sharpe, min_volatility, performance, tilt,
};

use crate::Verde;
use crate::router::util;

/// Optimization needs a cross-section; a single asset has nothing to weigh.
const MIN_UNIVERSE: usize = 2;

impl Verde {
    /// Construct an ESG-tilted portfolio over the universe.
    ///
    /// Behavior and trade-offs:
    /// - Signals and price history are gathered concurrently, then the market
    ///   is estimated exactly once; both solver attempts share that estimate,
    ///   since retrying a deterministic estimator cannot change its outcome.
    /// - The ESG-aware attempt tilts expected returns by normalized composite
    ///   and solves max-Sharpe. If the solver fails, the orchestrator runs
    ///   min-volatility on the same covariance and reports `mode = fallback`
    ///   with the first failure preserved as a warning; if that also fails,
    ///   the terminal error carries both contexts.
    /// - Reported performance is always measured against the untilted
    ///   estimates, so the two modes are comparable.
    /// - Degraded signal sources surface as warnings, never as request
    ///   errors; a failed price fetch fails the request, because every series
    ///   is needed.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a universe smaller than two or carrying
    /// duplicates, `InsufficientData` when the aligned history cannot support
    /// estimation, provider errors when price history cannot be fetched,
    /// `RequestTimeout` when the overall deadline expires, and
    /// `EsgAndFallbackFailed` when both solver attempts fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "verde::router",
            skip(self, tickers),
            fields(universe = tickers.len()),
        )
    )]
    pub async fn portfolio(
        &self,
        tickers: &[Ticker],
        span: DateSpan,
        as_of: DateTime<Utc>,
    ) -> Result<PortfolioReport, VerdeError> {
        util::validate_universe(tickers, MIN_UNIVERSE)?;

        let ((scores, mut warnings), history) =
            crate::core::with_request_deadline(self.cfg.request_timeout, async {
                tokio::join!(
                    self.collect_signals(tickers, as_of),
                    self.collect_histories(tickers, span),
                )
            })
            .await
            .map_err(|e| util::relabel_request_timeout(e, "portfolio"))?;
        let history = history?;

        let market = estimate(&history)?;
        let tilted = tilt(&market.mean_returns, &market.tickers, &scores, &self.cfg.tilt);

        match max_sharpe(
            &tilted,
            &market.covariance,
            self.cfg.risk_free_rate,
            self.cfg.bounds,
        ) {
            Ok(raw) => Ok(self.finish(PortfolioMode::EsgAware, &market, &raw, scores, warnings)),
            Err(esg_aware) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "verde::router",
                    error = %esg_aware,
                    "esg-aware attempt failed; falling back to min-volatility",
                );
                match min_volatility(&market.covariance, self.cfg.bounds) {
                    Ok(raw) => {
                        warnings.push(esg_aware);
                        Ok(self.finish(PortfolioMode::Fallback, &market, &raw, scores, warnings))
                    }
                    Err(fallback) => Err(VerdeError::esg_and_fallback(esg_aware, fallback)),
                }
            }
        }
    }

    /// Clean the raw solver weights and assemble the report. Performance is
    /// computed from the raw weights against the untilted estimates.
    fn finish(
        &self,
        mode: PortfolioMode,
        market: &MarketEstimate,
        raw: &DVector<f64>,
        scores: BTreeMap<Ticker, NormalizedEsgScore>,
        warnings: Vec<VerdeError>,
    ) -> PortfolioReport {
        PortfolioReport {
            scores,
            weights: clean(&market.tickers, raw),
            performance: performance(
                raw,
                &market.mean_returns,
                &market.covariance,
                self.cfg.risk_free_rate,
            ),
            mode,
            warnings,
        }
    }
}
