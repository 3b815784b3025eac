//! Name similarity scoring.

/// Scores how well a candidate name matches a query string.
pub trait SimilarityScorer {
    /// Similarity in `[0.0, 1.0]`; equal strings score `1.0`.
    fn score(&self, candidate: &str, query: &str) -> f64;
}

/// Jaro-Winkler similarity with default parameters.
///
/// Rewards matching characters in similar positions and boosts strings that
/// share a prefix (up to four characters), which suits autocomplete: the
/// query is usually the first few characters of the name being typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl SimilarityScorer for JaroWinkler {
    fn score(&self, candidate: &str, query: &str) -> f64 {
        rapidfuzz::distance::jaro_winkler::similarity(candidate.chars(), query.chars())
    }
}
