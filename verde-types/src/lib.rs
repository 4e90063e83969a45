//! Shared data transfer objects, configuration primitives, and the error
//! taxonomy for the verde ESG portfolio toolkit.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod pillar;
mod prices;
mod report;
mod signal;
mod ticker;

pub use capability::Capability;
pub use config::{NewsConfig, PillarWeights, TiltConfig, VerdeConfig, WeightBounds};
pub use error::VerdeError;
pub use pillar::{PartialPillarScore, Pillar, PillarScore, clamp01};
pub use prices::{DateSpan, PricePoint, PriceSeries};
pub use report::{
    PortfolioMode, PortfolioPerformance, PortfolioReport, PortfolioWeights, SignalReport,
};
pub use signal::{FusedScore, Headline, NormalizedEsgScore, RawSignalBundle};
pub use ticker::Ticker;
