//! Seeded sustainability disclosure fixtures.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use verde_core::Ticker;

use crate::fixtures::ticker_seed;

/// Multi-sentence disclosure templates; each sentence is long enough to
/// count as a scoring fragment on its own.
const TEMPLATES: &[&str] = &[
    "{} reduced carbon emissions across every operating segment this year. \
     Renewable energy now powers a growing share of our facilities. \
     The board expanded its audit committee to improve compliance oversight. \
     Employee safety programs achieved strong progress with fewer incidents.",
    "{} strengthened community partnerships and diversity hiring this year. \
     Our climate transition plan gained support from major shareholders. \
     Supplier ethics reviews exceeded the coverage targets we committed to. \
     Water usage declined at plants where efficiency upgrades were completed.",
    "{} faced penalties following an emission permit breach at one site. \
     Remediation work began immediately and leadership committed new funding. \
     Governance reviews found weak controls in two acquired subsidiaries. \
     A revised compliance program was approved by the audit committee.",
    "{} published its annual sustainability report covering all regions. \
     Labor relations improved after new employee benefit programs launched. \
     The company achieved progress toward its renewable energy commitments. \
     Transparency of board decisions improved under the revised charter.",
];

/// Pick a disclosure for a ticker, or `None` for the occasional
/// never-filed issuer.
///
/// `NOESG` never files; roughly one other ticker in eight has no filing.
pub fn by_ticker(seed: u64, ticker: &Ticker) -> Option<String> {
    if ticker.as_str() == "NOESG" {
        return None;
    }
    let mut rng = StdRng::seed_from_u64(ticker_seed(seed, ticker, "filing"));
    if rng.random_range(0..8u32) == 0 {
        return None;
    }
    let template = TEMPLATES[rng.random_range(0..TEMPLATES.len())];
    Some(template.replace("{}", ticker.as_str()))
}
