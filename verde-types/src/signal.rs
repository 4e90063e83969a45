//! Raw and derived signal shapes carried between pipeline stages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pillar::{PartialPillarScore, PillarScore};

/// A single news headline with its publication instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    /// Headline text.
    pub text: String,
    /// Publication instant (UTC).
    pub published_at: DateTime<Utc>,
}

impl Headline {
    /// Convenience constructor.
    #[must_use]
    pub fn new(text: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            published_at,
        }
    }
}

/// Per-ticker raw signals after per-source scoring, before fusion.
///
/// Source gaps are already resolved at this point: a silent news or filing
/// source shows up as the neutral triple, a silent sustainability source as
/// the empty partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSignalBundle {
    /// Structured sustainability pillar values, possibly partial.
    pub sustainability: PartialPillarScore,
    /// Recency-weighted score of recent headlines.
    pub news: PillarScore,
    /// Score of the latest long-form disclosure.
    pub filing: PillarScore,
}

/// Pillar triple after weighted fusion, before peer normalization.
///
/// Request-scoped: the value is only meaningful relative to the other
/// tickers in the same request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusedScore {
    /// Fused pillar values.
    pub pillars: PillarScore,
}

/// Pillar triple after min-max normalization across the request's peer
/// group; every value lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEsgScore {
    /// Normalized pillar values.
    pub pillars: PillarScore,
}

impl NormalizedEsgScore {
    /// Mean of the three normalized pillars; the tilt input.
    #[must_use]
    pub fn composite(&self) -> f64 {
        self.pillars.composite()
    }
}
