//! Recency-weighted aggregation of scored headlines.

use chrono::{DateTime, Utc};

use crate::score::text::score_headline;
use crate::types::{Headline, NewsConfig, PillarScore};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Aggregate dated headlines into one per-pillar news signal.
///
/// Only the `cfg.max_headlines` most recent headlines (relative to their
/// publication instants) are considered. Each is scored with
/// [`score_headline`] and weighted by `exp(-age_days / cfg.decay_days)`,
/// where age is measured back from `as_of` and clamped at zero for
/// future-dated items. The result is the weighted mean per pillar.
///
/// No headlines, or a total weight that underflows to zero, scores neutral.
#[must_use]
pub fn aggregate_headlines(
    headlines: &[Headline],
    as_of: DateTime<Utc>,
    cfg: &NewsConfig,
) -> PillarScore {
    if headlines.is_empty() {
        return PillarScore::NEUTRAL;
    }

    let mut recent: Vec<&Headline> = headlines.iter().collect();
    recent.sort_by_key(|h| core::cmp::Reverse(h.published_at));
    recent.truncate(cfg.max_headlines);

    let mut weight_sum = 0.0;
    let mut sums = [0.0f64; 3];
    for headline in recent {
        let age_days =
            ((as_of - headline.published_at).num_seconds() as f64 / SECONDS_PER_DAY).max(0.0);
        let weight = (-age_days / cfg.decay_days).exp();
        let scored = score_headline(&headline.text);
        sums[0] += weight * scored.e;
        sums[1] += weight * scored.s;
        sums[2] += weight * scored.g;
        weight_sum += weight;
    }
    if weight_sum <= 0.0 {
        return PillarScore::NEUTRAL;
    }
    PillarScore {
        e: sums[0] / weight_sum,
        s: sums[1] / weight_sum,
        g: sums[2] / weight_sum,
    }
}
