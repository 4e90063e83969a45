//! Verde fuses ESG signals from pluggable data providers and turns them into
//! ESG-tilted portfolios.
//!
//! Overview
//! - Routes per-ticker requests to connectors that implement the `verde_core`
//!   provider contracts, trying them in registration order per capability.
//! - Collects sustainability scores, news, and disclosures concurrently,
//!   fuses them into per-pillar scores, and normalizes across the peer group.
//! - Estimates annualized returns and a shrinkage covariance from close
//!   series, tilts expected returns by ESG composite, and solves a
//!   constrained max-Sharpe portfolio with a min-volatility fallback.
//! - Normalizes error handling and exposes uniform domain types from
//!   `verde_core`.
//!
//! Key behaviors and trade-offs
//! - Signal degradation: a failing or slow signal source for one ticker
//!   degrades that ticker to neutral and records a warning on the report;
//!   it never fails the batch. Price history is different: the estimator
//!   needs every series, so a failed price fetch fails the request.
//! - Attempt machine: the ESG-aware max-Sharpe attempt runs once; on solver
//!   failure the orchestrator runs min-volatility on the same covariance and
//!   reports `mode = fallback` with the first failure preserved as a
//!   warning. If both fail, the terminal error carries both contexts.
//! - Timeouts: `provider_timeout` bounds every provider call;
//!   `request_timeout` optionally bounds a whole batch operation.
//! - Determinism: identical inputs (tickers, span, as-of instant, seed of a
//!   deterministic connector) produce identical reports, independent of task
//!   interleaving.
//!
//! Examples
//! Building an orchestrator against a connector stack:
//! ```rust,ignore
//! use std::sync::Arc;
//! use verde::{Verde, WeightBounds};
//!
//! let vendor = Arc::new(AcmeEsgConnector::new_with_key("..."));
//! let market = Arc::new(MarketDataConnector::new_default());
//!
//! let verde = Verde::builder()
//!     .with_connector(vendor)
//!     .with_connector(market)
//!     .risk_free_rate(0.03)
//!     .bounds(WeightBounds { min: 0.0, max: 0.4 })
//!     .build()?;
//! ```
//!
//! Scoring a peer group and constructing a portfolio:
//! ```rust,ignore
//! use chrono::Utc;
//! use verde::{DateSpan, Ticker};
//!
//! let universe = vec![Ticker::new("AAPL")?, Ticker::new("MSFT")?];
//! let span = DateSpan::new(start, end)?;
//!
//! let signals = verde.esg_scores(&universe, Utc::now()).await?;
//! let report = verde.portfolio(&universe, span, Utc::now()).await?;
//! println!("{} portfolio: {:?}", report.mode, report.weights);
//! ```
//!
//! Turning weights into whole-share purchases:
//! ```rust,ignore
//! use verde::allocate;
//!
//! let allocation = allocate(&report.weights, &latest_prices, 10_000.0)?;
//! println!("buy {:?}, keep {:.2} in cash", allocation.shares, allocation.leftover);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Verde, VerdeBuilder};
pub use router::util::{collapse_errors, join_with_deadline};

// Re-export the domain surface for convenience
pub use verde_core::{
    Capability,
    DateSpan,
    DiscreteAllocation,
    FusedScore,
    Headline,
    MarketEstimate,
    NewsConfig,
    NormalizedEsgScore,
    PartialPillarScore,
    Pillar,
    PillarScore,
    PillarWeights,
    PortfolioMode,
    PortfolioPerformance,
    PortfolioReport,
    PortfolioWeights,
    PricePoint,
    PriceSeries,
    RawSignalBundle,
    SignalReport,
    Ticker,
    TiltConfig,
    VerdeConfig,
    VerdeConnector,
    VerdeError,
    WeightBounds,
    // Pure post-processing of a finished report
    allocate,
};
