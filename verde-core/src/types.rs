//! Re-export of foundational types from `verde-types`.
// Consolidated re-exports so downstream crates can depend on `verde-core` only

pub use verde_types::{Capability, VerdeError};

pub use verde_types::{DateSpan, PricePoint, PriceSeries, Ticker};

pub use verde_types::{FusedScore, Headline, NormalizedEsgScore, RawSignalBundle};
pub use verde_types::{PartialPillarScore, Pillar, PillarScore, clamp01};

pub use verde_types::{NewsConfig, PillarWeights, TiltConfig, VerdeConfig, WeightBounds};

pub use verde_types::{
    PortfolioMode, PortfolioPerformance, PortfolioReport, PortfolioWeights, SignalReport,
};
