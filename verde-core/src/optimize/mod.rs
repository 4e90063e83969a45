mod allocation;
mod frontier;
mod performance;
mod projection;

pub use allocation::{DiscreteAllocation, allocate};
pub use frontier::{clean, max_sharpe, min_volatility};
pub use performance::performance;
