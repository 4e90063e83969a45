use std::sync::Arc;
use std::time::Duration;

use verde_core::types::{NewsConfig, PillarWeights, TiltConfig, VerdeConfig, WeightBounds};
use verde_core::{Capability, Ticker, VerdeConnector, VerdeError};

/// Orchestrator that routes signal and price requests across registered
/// providers and assembles scored, optimized portfolio reports.
pub struct Verde {
    pub(crate) connectors: Vec<Arc<dyn VerdeConnector>>,
    pub(crate) cfg: VerdeConfig,
}

impl std::fmt::Debug for Verde {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verde")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Verde` orchestrator with custom configuration.
pub struct VerdeBuilder {
    connectors: Vec<Arc<dyn VerdeConnector>>,
    cfg: VerdeConfig,
}

impl Default for VerdeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VerdeBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults mirror [`VerdeConfig::default`]: fusion weights 0.50/0.35/0.15,
    ///   21-day news decay over at most 40 headlines, tilt threshold 0.6 with
    ///   penalty 0.8, long-only bounds, 2% risk-free rate, 5s provider timeout,
    ///   no overall request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: VerdeConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the routing order: for each capability the
    ///   orchestrator tries connectors front to back and the first success
    ///   wins.
    /// - Multiple connectors can serve the same capability; later ones act
    ///   as fallbacks for earlier failures.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn VerdeConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the fusion weights across the three signal families.
    ///
    /// Weights must be finite, non-negative, and sum to 1;
    /// [`build`](Self::build) rejects anything else.
    #[must_use]
    pub const fn pillar_weights(mut self, weights: PillarWeights) -> Self {
        self.cfg.pillar_weights = weights;
        self
    }

    /// Set the news recency weighting (decay e-folding age and headline cap).
    #[must_use]
    pub const fn news(mut self, news: NewsConfig) -> Self {
        self.cfg.news = news;
        self
    }

    /// Set the ESG tilt threshold and penalty applied to expected returns.
    ///
    /// Behavior and trade-offs:
    /// - A lower threshold penalizes fewer tickers; a penalty of 1 makes the
    ///   tilt a no-op.
    /// - The tilt only feeds the max-Sharpe attempt; reported performance is
    ///   always measured against the untilted estimates.
    #[must_use]
    pub const fn tilt(mut self, tilt: TiltConfig) -> Self {
        self.cfg.tilt = tilt;
        self
    }

    /// Set per-asset weight bounds for the solvers.
    ///
    /// Behavior and trade-offs:
    /// - Bounds are validated for shape at build time (`0 <= min < max <= 1`);
    ///   feasibility against the universe size (`n * max >= 1`) can only be
    ///   checked per request and surfaces as an optimization error there.
    #[must_use]
    pub const fn bounds(mut self, bounds: WeightBounds) -> Self {
        self.cfg.bounds = bounds;
        self
    }

    /// Set the annualized risk-free rate used by max-Sharpe and reporting.
    #[must_use]
    pub const fn risk_free_rate(mut self, rate: f64) -> Self {
        self.cfg.risk_free_rate = rate;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Behavior and trade-offs:
    /// - Bounds each provider call; a timed-out signal source degrades to
    ///   neutral with a warning, a timed-out price fetch falls through to the
    ///   next capable connector.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for batch operations.
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency of `esg_scores` and `portfolio` even when many
    ///   providers time out sequentially.
    /// - When exceeded, the operation returns `RequestTimeout` labelled with
    ///   the operation name.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Verde` orchestrator.
    ///
    /// Configuration is validated here, before any provider is consulted, so
    /// a bad configuration never reaches the pipeline.
    ///
    /// # Errors
    /// Returns `Config` if any configuration section is invalid, or
    /// `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(self) -> Result<Verde, VerdeError> {
        self.cfg.validate()?;

        if self.connectors.is_empty() {
            return Err(VerdeError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Verde {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: VerdeError) -> VerdeError {
    match e {
        e @ (VerdeError::NotFound { .. }
        | VerdeError::ProviderTimeout { .. }
        | VerdeError::Connector { .. }
        | VerdeError::RequestTimeout { .. }
        | VerdeError::AllProvidersTimedOut { .. }
        | VerdeError::AllProvidersFailed(_)) => e,
        other => VerdeError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Run `fut` under an optional overall deadline.
///
/// `None` awaits the future to completion. On expiry the caller receives
/// `RequestTimeout` with the generic "request" capability label, which call
/// sites remap to the operation's own label before surfacing it.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, VerdeError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(limit) => (tokio::time::timeout(limit, fut).await)
            .map_err(|_| VerdeError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Verde {
    /// Start building a new `Verde` instance.
    ///
    /// Typical usage chains provider registration and configuration, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use verde_core::VerdeConnector;
    ///
    /// // Connector types for demonstration
    /// struct EsgVendor;
    /// struct MarketData;
    /// impl VerdeConnector for EsgVendor {
    ///     fn name(&self) -> &'static str { "esg-vendor" }
    /// }
    /// impl VerdeConnector for MarketData {
    ///     fn name(&self) -> &'static str { "market-data" }
    /// }
    ///
    /// let verde = verde::Verde::builder()
    ///     .with_connector(Arc::new(EsgVendor))
    ///     .with_connector(Arc::new(MarketData))
    ///     .risk_free_rate(0.03)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> VerdeBuilder {
        VerdeBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "verde::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, VerdeError>
    where
        Fut: core::future::Future<Output = Result<T, VerdeError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(VerdeError::provider_timeout(connector_name, capability)))
    }

    /// Single-item fetch over the registered connectors.
    ///
    /// - Tries connectors in registration order; the first success wins.
    /// - Applies the per-provider timeout to every attempt.
    /// - Aggregates failures through [`collapse_errors`](crate::collapse_errors):
    ///   all-`NotFound` becomes "`not_found` for TICKER", all timeouts become
    ///   `AllProvidersTimedOut`, no capable connector becomes `Unsupported`.
    ///
    /// `not_found` is a noun only (e.g. "news", "price history"); the final
    /// error reads "{noun} for {TICKER}".
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "verde::core::fetch_first",
            skip(self, call),
            fields(ticker = %ticker, capability = %capability),
        )
    )]
    pub(crate) async fn fetch_first<T, F, Fut>(
        &self,
        ticker: &Ticker,
        capability: Capability,
        not_found: &'static str,
        call: F,
    ) -> Result<T, VerdeError>
    where
        T: Send,
        F: Fn(Arc<dyn VerdeConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, VerdeError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<VerdeError> = Vec::new();

        for c in &self.connectors {
            if let Some(fut) = call(c.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability.as_str(),
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (VerdeError::NotFound { .. } | VerdeError::ProviderTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{not_found} for {ticker}")),
        ))
    }
}
