//! Weighted fusion of per-source pillar signals.

use crate::types::{FusedScore, Pillar, PillarScore, PillarWeights, RawSignalBundle};

/// Fuse one ticker's per-source signals into a single pillar triple.
///
/// Per pillar the result is the weighted sum of the three sources. A partial
/// or empty sustainability source resolves against the neutral prior first,
/// so missing fields contribute 0.5 rather than dragging the pillar down.
///
/// Pure; never errors. Weight validity is enforced upstream by
/// [`PillarWeights::validate`].
#[must_use]
pub fn fuse(bundle: &RawSignalBundle, weights: &PillarWeights) -> FusedScore {
    let sustainability = bundle.sustainability.or_neutral();
    let combine = |pillar: Pillar| {
        weights.sustainability * sustainability.get(pillar)
            + weights.news * bundle.news.get(pillar)
            + weights.filing * bundle.filing.get(pillar)
    };
    FusedScore {
        pillars: PillarScore::clamped(
            combine(Pillar::Environmental),
            combine(Pillar::Social),
            combine(Pillar::Governance),
        ),
    }
}
