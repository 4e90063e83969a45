//! verde-core
//!
//! Connector traits and the pure computation engines shared across the verde
//! ecosystem.
//!
//! - `connector`: the `VerdeConnector` trait and capability provider traits.
//! - `score`: lexicon-based scoring of disclosure text and dated headlines.
//! - `signal`: weighted pillar fusion and cross-sectional peer normalization.
//! - `estimate`: annualized return and shrinkage covariance estimation.
//! - `tilt`: sustainability-aware adjustment of expected returns.
//! - `optimize`: constrained frontier solvers, weight cleaning, and discrete
//!   allocation.
//!
//! Every engine here is deterministic: identical inputs produce identical
//! outputs, with no clock reads, no randomness, and no I/O. Scheduling,
//! timeouts, and provider fan-out live in the `verde` facade; network access
//! lives in connectors.
#![warn(missing_docs)]

/// Connector capability traits and the primary `VerdeConnector` interface.
pub mod connector;
/// Annualized return and shrinkage covariance estimation from close series.
pub mod estimate;
/// Constrained mean-variance solvers, weight cleaning, discrete allocation.
pub mod optimize;
/// Lexicon scoring of sustainability text and recency-weighted headlines.
pub mod score;
/// Pillar fusion and cross-sectional peer normalization.
pub mod signal;
/// Sustainability tilt on expected returns.
pub mod tilt;
pub mod types;

pub use connector::VerdeConnector;
pub use estimate::{MarketEstimate, estimate};
pub use optimize::{DiscreteAllocation, allocate, clean, max_sharpe, min_volatility, performance};
pub use score::{aggregate_headlines, score_document, score_headline};
pub use signal::{fuse, normalize};
pub use tilt::tilt;
pub use types::*;
