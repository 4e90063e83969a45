//! Keyword vocabularies and the per-fragment analysis shared by the
//! document and headline scorers.

/// Substrings that place a fragment in the environmental bucket.
const ENVIRONMENTAL: &[&str] = &[
    "environment",
    "climate",
    "emission",
    "carbon",
    "sustainab",
    "renewable",
    "green",
    "energy",
];

/// Substrings that place a fragment in the social bucket.
const SOCIAL: &[&str] = &[
    "social",
    "community",
    "diversity",
    "inclusion",
    "labor",
    "employee",
    "human rights",
    "safety",
];

/// Substrings that place a fragment in the governance bucket.
const GOVERNANCE: &[&str] = &[
    "governance",
    "board",
    "audit",
    "ethic",
    "compliance",
    "transparen",
    "shareholder",
    "corruption",
];

/// Token prefixes counted as positive polarity.
const POSITIVE: &[&str] = &[
    "improv", "achiev", "advanc", "strong", "commit", "leader", "innovat", "benefit", "award",
    "progress", "exceed", "positiv", "gain", "support", "success", "responsib", "protect",
    "empower", "efficien", "reduc",
];

/// Token prefixes counted as negative polarity.
const NEGATIVE: &[&str] = &[
    "violat",
    "penalt",
    "lawsuit",
    "scandal",
    "breach",
    "pollut",
    "spill",
    "fraud",
    "corrupt",
    "layoff",
    "accident",
    "fatalit",
    "declin",
    "fail",
    "weak",
    "controvers",
    "harm",
    "toxic",
    "underperform",
    "shortfall",
];

/// Tokens that flip the polarity of a nearby sentiment word.
const NEGATORS: &[&str] = &["not", "no", "never", "without"];

/// How many preceding tokens a negator reaches.
const NEGATION_WINDOW: usize = 2;

/// Everything the scorers need to know about one fragment of text.
pub(crate) struct FragmentSignal {
    /// Lexicon sentiment mapped into `[0, 1]`.
    pub(crate) s01: f64,
    /// Bucket matches, indexed in `Pillar::ALL` order.
    pub(crate) hits: [bool; 3],
    /// Alphanumeric token count, used by the fragment-length filter.
    pub(crate) tokens: usize,
}

impl FragmentSignal {
    /// Contribution of this fragment to the pillar at `idx` in `Pillar::ALL`
    /// order: matched buckets receive the full mapped sentiment, unmatched
    /// buckets zero. A fragment matching no bucket at all spreads an equal
    /// diffuse `s01 / 3` across the three pillars instead.
    pub(crate) fn contribution(&self, idx: usize) -> f64 {
        if self.hits.iter().any(|&hit| hit) {
            if self.hits[idx] { self.s01 } else { 0.0 }
        } else {
            self.s01 / 3.0
        }
    }
}

/// Analyze one fragment: tokenize, score sentiment, match pillar buckets.
pub(crate) fn analyze_fragment(fragment: &str) -> FragmentSignal {
    let lower = fragment.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    let hits = [
        ENVIRONMENTAL.iter().any(|kw| lower.contains(kw)),
        SOCIAL.iter().any(|kw| lower.contains(kw)),
        GOVERNANCE.iter().any(|kw| lower.contains(kw)),
    ];
    FragmentSignal {
        s01: (sentiment(&tokens) + 1.0) / 2.0,
        hits,
        tokens: tokens.len(),
    }
}

/// Lexicon sentiment over a token stream, in `[-1, 1]`.
///
/// Counts positive and negative prefix matches; a negator within the two
/// preceding tokens flips the match. No sentiment words at all scores 0.
fn sentiment(tokens: &[&str]) -> f64 {
    let mut positive = 0.0;
    let mut negative = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        let polarity = if POSITIVE.iter().any(|stem| token.starts_with(stem)) {
            1.0
        } else if NEGATIVE.iter().any(|stem| token.starts_with(stem)) {
            -1.0
        } else {
            continue;
        };
        let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
            .iter()
            .any(|t| NEGATORS.contains(t));
        let polarity = if negated { -polarity } else { polarity };
        if polarity > 0.0 {
            positive += 1.0;
        } else {
            negative += 1.0;
        }
    }
    let matched = positive + negative;
    if matched == 0.0 {
        0.0
    } else {
        (positive - negative) / matched
    }
}
