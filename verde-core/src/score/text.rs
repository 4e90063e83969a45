//! Document and headline scoring.

use crate::score::lexicon::{FragmentSignal, analyze_fragment};
use crate::types::{PillarScore, clamp01};

/// Upper bound on scored fragments per document.
pub const MAX_FRAGMENTS: usize = 300;

/// Minimum alphanumeric tokens for a fragment to be scored on its own.
pub const MIN_FRAGMENT_TOKENS: usize = 4;

/// Weight of the per-fragment mean in the blended document score.
const FRAGMENT_WEIGHT: f64 = 0.7;

/// Weight of the document-level sentiment bias in the blended score.
const DOCUMENT_WEIGHT: f64 = 0.3;

/// Score a long-form disclosure into per-pillar values in `[0, 1]`.
///
/// The text is flattened (newlines become spaces) and split into sentence
/// fragments on `.`. Fragments shorter than [`MIN_FRAGMENT_TOKENS`] are
/// skipped; when none qualify the whole text is scored as one fragment. At
/// most [`MAX_FRAGMENTS`] fragments are considered. Each pillar blends the
/// mean fragment contribution with a document-level sentiment bias.
///
/// Blank text scores neutral. Never errors.
#[must_use]
pub fn score_document(text: &str) -> PillarScore {
    if text.trim().is_empty() {
        return PillarScore::NEUTRAL;
    }
    let flat = text.replace(['\n', '\r'], " ");
    let mut fragments: Vec<FragmentSignal> = flat
        .split('.')
        .map(analyze_fragment)
        .filter(|sig| sig.tokens >= MIN_FRAGMENT_TOKENS)
        .take(MAX_FRAGMENTS)
        .collect();
    if fragments.is_empty() {
        fragments.push(analyze_fragment(&flat));
    }

    let doc_bias = analyze_fragment(&flat).s01;
    let count = fragments.len() as f64;
    let mut sums = [0.0f64; 3];
    for sig in &fragments {
        for (idx, sum) in sums.iter_mut().enumerate() {
            *sum += sig.contribution(idx);
        }
    }
    let blend = |sum: f64| clamp01(FRAGMENT_WEIGHT * (sum / count) + DOCUMENT_WEIGHT * doc_bias);
    PillarScore {
        e: blend(sums[0]),
        s: blend(sums[1]),
        g: blend(sums[2]),
    }
}

/// Score a single headline: one fragment, same bucket and sentiment rules,
/// no document-level blending.
#[must_use]
pub fn score_headline(text: &str) -> PillarScore {
    let sig = analyze_fragment(text);
    PillarScore {
        e: sig.contribution(0),
        s: sig.contribution(1),
        g: sig.contribution(2),
    }
}
