//! Seeded headline fixtures with recent publication instants.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use verde_core::{Headline, Ticker};

use crate::fixtures::ticker_seed;

/// Headline templates spanning the three pillars and both sentiment
/// directions, plus a few off-topic items.
const TEMPLATES: &[&str] = &[
    "{} advances renewable energy program with new solar capacity",
    "{} wins community award for diversity and inclusion",
    "{} board improves audit and compliance oversight",
    "{} faces lawsuit over chemical spill at coastal plant",
    "{} reduces carbon emissions ahead of plan",
    "{} hit with penalties after labor safety violations",
    "{} shareholders approve governance transparency reforms",
    "{} announces layoffs amid weak quarterly results",
    "{} achieves strong progress on climate commitments",
    "{} under investigation for accounting fraud allegations",
];

/// Oldest generated headline age, in hours (45 days).
const MAX_AGE_HOURS: u32 = 45 * 24;

/// Generate up to `limit` headlines for a ticker, most recent first.
///
/// Texts and their relative ages are seeded; publication instants are
/// anchored to the call time, the way a live vendor reports "recent" news.
/// `NOESG` is a quiet ticker with no coverage.
pub fn by_ticker(seed: u64, ticker: &Ticker, limit: usize) -> Vec<Headline> {
    if ticker.as_str() == "NOESG" {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(ticker_seed(seed, ticker, "news"));
    let count = rng.random_range(4..=9);
    let mut drafts: Vec<(u32, String)> = (0..count)
        .map(|_| {
            let template = TEMPLATES[rng.random_range(0..TEMPLATES.len())];
            let age_hours = rng.random_range(2..=MAX_AGE_HOURS);
            (age_hours, template.replace("{}", ticker.as_str()))
        })
        .collect();
    drafts.sort_by_key(|(age_hours, _)| *age_hours);
    drafts.truncate(limit);

    let now = Utc::now();
    drafts
        .into_iter()
        .map(|(age_hours, text)| Headline::new(text, now - Duration::hours(i64::from(age_hours))))
        .collect()
}
