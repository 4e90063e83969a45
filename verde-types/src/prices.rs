//! Validated price history containers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::VerdeError;

/// A single close observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price; strictly positive and finite.
    pub close: f64,
}

/// A validated close series: dates strictly increasing, closes positive and
/// finite. An empty series is valid and means "no rows in range", which is
/// distinct from an unknown ticker (a provider error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from observations, oldest first.
    ///
    /// # Errors
    /// Returns [`VerdeError::InvalidArg`] when dates are not strictly
    /// increasing or any close is non-positive or non-finite.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, VerdeError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(VerdeError::InvalidArg(format!(
                    "price series dates must be strictly increasing (saw {} after {})",
                    pair[1].date, pair[0].date
                )));
            }
        }
        if let Some(p) = points
            .iter()
            .find(|p| !p.close.is_finite() || p.close <= 0.0)
        {
            return Err(VerdeError::InvalidArg(format!(
                "close on {} must be positive and finite, got {}",
                p.date, p.close
            )));
        }
        Ok(Self { points })
    }

    /// An empty series, the valid "no rows in range" answer.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Observations, oldest first.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent close, if any.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}

/// Closed date interval for history requests; `start` must precede `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Build a span.
    ///
    /// # Errors
    /// Returns [`VerdeError::InvalidArg`] when `start >= end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, VerdeError> {
        if start >= end {
            return Err(VerdeError::InvalidArg(format!(
                "date span start {start} must precede end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Span start (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Span end (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `date` falls within the span.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
