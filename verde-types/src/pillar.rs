//! Pillar score primitives shared by every stage of the signal pipeline.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The three ESG pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    /// Environmental.
    Environmental,
    /// Social.
    Social,
    /// Governance.
    Governance,
}

impl Pillar {
    /// All pillars in canonical order.
    pub const ALL: [Self; 3] = [Self::Environmental, Self::Social, Self::Governance];

    /// Stable, kebab-case identifier for logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Environmental => "environmental",
            Self::Social => "social",
            Self::Governance => "governance",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete per-pillar score triple, each value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    /// Environmental pillar value.
    pub e: f64,
    /// Social pillar value.
    pub s: f64,
    /// Governance pillar value.
    pub g: f64,
}

impl PillarScore {
    /// The neutral prior substituted whenever a source is silent.
    pub const NEUTRAL: Self = Self {
        e: 0.5,
        s: 0.5,
        g: 0.5,
    };

    /// Build a triple, clamping each value into `[0, 1]`.
    #[must_use]
    pub fn clamped(e: f64, s: f64, g: f64) -> Self {
        Self {
            e: clamp01(e),
            s: clamp01(s),
            g: clamp01(g),
        }
    }

    /// Value of a single pillar.
    #[must_use]
    pub const fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Environmental => self.e,
            Pillar::Social => self.s,
            Pillar::Governance => self.g,
        }
    }

    /// Arithmetic mean of the three pillar values.
    #[must_use]
    pub fn composite(&self) -> f64 {
        (self.e + self.s + self.g) / 3.0
    }
}

impl Default for PillarScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// A possibly partial pillar triple, as reported by sustainability sources.
///
/// `None` means the source had nothing for that pillar. This is the one
/// partial form in the workspace; fusion resolves it against the neutral
/// prior rather than each stage inventing its own optional shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPillarScore {
    /// Environmental pillar value, if reported.
    pub e: Option<f64>,
    /// Social pillar value, if reported.
    pub s: Option<f64>,
    /// Governance pillar value, if reported.
    pub g: Option<f64>,
}

impl PartialPillarScore {
    /// True when the source reported nothing at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.e.is_none() && self.s.is_none() && self.g.is_none()
    }

    /// Resolve to a complete triple: missing or non-finite fields become the
    /// neutral 0.5, reported ones are clamped into `[0, 1]`.
    #[must_use]
    pub fn or_neutral(&self) -> PillarScore {
        PillarScore {
            e: sane(self.e),
            s: sane(self.s),
            g: sane(self.g),
        }
    }
}

fn sane(v: Option<f64>) -> f64 {
    match v {
        Some(x) if x.is_finite() => clamp01(x),
        _ => 0.5,
    }
}

/// Clamp a value into `[0, 1]`.
#[must_use]
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
