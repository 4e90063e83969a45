//! Cross-sectional min-max normalization over the peer group.

use std::collections::BTreeMap;

use crate::types::{FusedScore, NormalizedEsgScore, Pillar, PillarScore, Ticker};

/// Spread below which a pillar is considered degenerate across the group.
const DEGENERATE_SPREAD: f64 = 1e-9;

/// Min-max normalize fused scores across the peer group, pillar by pillar.
///
/// Each pillar maps to `(v - min) / (max - min)` over the group. A pillar
/// whose spread collapses (identical values, or a single ticker) normalizes
/// to 0.5 for every member rather than dividing by nothing. The output is
/// only meaningful relative to this peer group.
#[must_use]
pub fn normalize(fused: &BTreeMap<Ticker, FusedScore>) -> BTreeMap<Ticker, NormalizedEsgScore> {
    let range = |pillar: Pillar| {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for score in fused.values() {
            let v = score.pillars.get(pillar);
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo, hi - lo)
    };
    let (e_lo, e_spread) = range(Pillar::Environmental);
    let (s_lo, s_spread) = range(Pillar::Social);
    let (g_lo, g_spread) = range(Pillar::Governance);

    let scale = |v: f64, lo: f64, spread: f64| {
        if spread < DEGENERATE_SPREAD {
            0.5
        } else {
            (v - lo) / spread
        }
    };
    fused
        .iter()
        .map(|(ticker, score)| {
            let normalized = NormalizedEsgScore {
                pillars: PillarScore {
                    e: scale(score.pillars.e, e_lo, e_spread),
                    s: scale(score.pillars.s, s_lo, s_spread),
                    g: scale(score.pillars.g, g_lo, g_spread),
                },
            };
            (ticker.clone(), normalized)
        })
        .collect()
}
