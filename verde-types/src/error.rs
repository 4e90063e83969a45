//! Unified error taxonomy for the verde workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the verde workspace.
///
/// Wraps capability mismatches, argument and configuration validation,
/// provider-tagged failures, estimator and solver failures, and the
/// aggregates produced by multi-provider attempts and the two-stage
/// optimization.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerdeError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "news").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Invalid configuration; rejected at build time, before any provider
    /// call is made.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or ticker could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "ticker UNKNOWN".
        what: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<VerdeError>),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "news", "price-history").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },

    /// Too little history to estimate returns or covariance. Surfaced
    /// immediately; retrying cannot help without more data.
    #[error("insufficient data: {what}")]
    InsufficientData {
        /// Description of what fell short, naming the ticker where known.
        what: String,
    },

    /// The frontier solver could not produce a portfolio.
    #[error("optimization failed ({mode}): {reason}")]
    Optimization {
        /// Solver mode that failed ("max-sharpe" or "min-volatility").
        mode: String,
        /// Human-readable failure reason.
        reason: String,
    },

    /// Both the ESG-aware attempt and the min-volatility fallback failed.
    /// Carries both failure contexts so neither is lost.
    #[error("esg-aware attempt failed ({esg_aware}); fallback failed ({fallback})")]
    EsgAndFallbackFailed {
        /// Failure of the ESG-aware max-Sharpe attempt.
        esg_aware: Box<VerdeError>,
        /// Failure of the subsequent min-volatility attempt.
        fallback: Box<VerdeError>,
    },
}

impl VerdeError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing
    /// resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InsufficientData` error.
    pub fn insufficient_data(what: impl Into<String>) -> Self {
        Self::InsufficientData { what: what.into() }
    }

    /// Helper: build an `Optimization` error for a solver mode.
    pub fn optimization(mode: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Optimization {
            mode: mode.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Helper: combine the two attempt failures into the terminal error.
    #[must_use]
    pub fn esg_and_fallback(esg_aware: Self, fallback: Self) -> Self {
        Self::EsgAndFallbackFailed {
            esg_aware: Box::new(esg_aware),
            fallback: Box::new(fallback),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Non-actionable errors are those indicating capability absence or a
    /// benign not-found condition; the signal pipeline recovers them into
    /// neutral defaults. Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
