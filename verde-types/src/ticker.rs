//! Canonical ticker symbol type.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VerdeError;

/// Canonical ticker symbol: trimmed, uppercased, never empty.
///
/// Ordering is lexicographic on the canonical form, so ticker-keyed
/// `BTreeMap`s iterate in a stable order across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Canonicalize a raw symbol: strip surrounding whitespace and uppercase
    /// the remainder.
    ///
    /// # Errors
    /// Returns [`VerdeError::InvalidArg`] when the input is empty after
    /// trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, VerdeError> {
        let canonical = raw.as_ref().trim().to_uppercase();
        if canonical.is_empty() {
            return Err(VerdeError::InvalidArg("ticker must not be empty".into()));
        }
        Ok(Self(canonical))
    }

    /// The canonical symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = VerdeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
