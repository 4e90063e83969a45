mod market;
mod shrinkage;

pub use market::{MarketEstimate, estimate};

/// Trading days per year used to annualize daily estimates.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
