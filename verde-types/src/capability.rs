//! Capability labels shared by routing, errors, and telemetry.

use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with provider role traits and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Structured sustainability pillar scores.
    Sustainability,
    /// Recent headlines for a ticker.
    News,
    /// Latest long-form disclosure text.
    Filing,
    /// Daily close history.
    PriceHistory,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sustainability => "sustainability",
            Self::News => "news",
            Self::Filing => "filing",
            Self::PriceHistory => "price-history",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
