mod lexicon;
mod news;
mod text;

pub use news::aggregate_headlines;
pub use text::{MAX_FRAGMENTS, MIN_FRAGMENT_TOKENS, score_document, score_headline};
