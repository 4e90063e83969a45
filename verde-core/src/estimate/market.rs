//! Joint return and risk estimation over an aligned peer group.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use nalgebra::{DMatrix, DVector};

use crate::estimate::TRADING_DAYS_PER_YEAR;
use crate::estimate::shrinkage::ledoit_wolf;
use crate::types::{PriceSeries, Ticker, VerdeError};

/// Fewest shared observation dates that still yield a joint covariance
/// (two overlapping return rows).
const MIN_SHARED_DATES: usize = 3;

/// Annualized estimates over a peer group, aligned on shared dates.
///
/// `tickers` fixes the axis order: row `i` of `mean_returns` and row/column
/// `i` of `covariance` belong to `tickers[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEstimate {
    /// Tickers in axis order (sorted, since the input map is ordered).
    pub tickers: Vec<Ticker>,
    /// Compounded annualized mean return per ticker.
    pub mean_returns: DVector<f64>,
    /// Annualized Ledoit-Wolf shrinkage covariance.
    pub covariance: DMatrix<f64>,
}

/// Estimate expected returns and covariance from per-ticker close series.
///
/// Series are aligned on the intersection of their observation dates, turned
/// into simple daily returns, then annualized at [`TRADING_DAYS_PER_YEAR`]:
/// compounded means for the return vector, shrunk sample covariance for the
/// risk matrix.
///
/// # Errors
/// Returns [`VerdeError::InsufficientData`] when any ticker has fewer than
/// two observations, or when the group shares too few dates for even two
/// overlapping return rows. Estimation is deterministic, so these errors are
/// final: retrying cannot help without more data.
pub fn estimate(history: &BTreeMap<Ticker, PriceSeries>) -> Result<MarketEstimate, VerdeError> {
    for (ticker, series) in history {
        if series.len() < 2 {
            return Err(VerdeError::insufficient_data(format!(
                "ticker {ticker} has {} price observation(s); need at least 2",
                series.len()
            )));
        }
    }

    let mut shared: Option<BTreeSet<NaiveDate>> = None;
    for series in history.values() {
        let dates: BTreeSet<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        shared = Some(match shared {
            None => dates,
            Some(acc) => acc.intersection(&dates).copied().collect(),
        });
    }
    let shared = shared.unwrap_or_default();
    if shared.len() < MIN_SHARED_DATES {
        return Err(VerdeError::insufficient_data(format!(
            "only {} overlapping return row(s) across {} ticker(s); need at least 2",
            shared.len().saturating_sub(1),
            history.len()
        )));
    }

    let rows = shared.len() - 1;
    let mut tickers = Vec::with_capacity(history.len());
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(history.len());
    for (ticker, series) in history {
        let closes: Vec<f64> = series
            .points()
            .iter()
            .filter(|p| shared.contains(&p.date))
            .map(|p| p.close)
            .collect();
        let returns: Vec<f64> = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
        tickers.push(ticker.clone());
        columns.push(returns);
    }
    let returns = DMatrix::from_fn(rows, columns.len(), |i, j| columns[j][i]);

    Ok(MarketEstimate {
        tickers,
        mean_returns: annualized_mean_returns(&returns),
        covariance: ledoit_wolf(&returns),
    })
}

/// Compounded annualized mean return per column of the daily returns matrix.
fn annualized_mean_returns(returns: &DMatrix<f64>) -> DVector<f64> {
    let rows = returns.nrows() as f64;
    DVector::from_iterator(
        returns.ncols(),
        returns.column_iter().map(|column| {
            let log_growth: f64 = column.iter().map(|r| (1.0 + r).ln()).sum();
            (log_growth * (TRADING_DAYS_PER_YEAR / rows)).exp() - 1.0
        }),
    )
}
