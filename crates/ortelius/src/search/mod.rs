//! Suggestion search: name similarity, proximity filtering and ranking.
//!
//! The pieces compose one pipeline: candidates come out of the repository,
//! the proximity filter narrows them, the similarity scorer orders them, and
//! the ranking step slices out the requested page.

pub use error::SearchError;
mod proximity;
mod rank;
mod similarity;

use error::Result;
pub use proximity::{MAX_LATITUDE_DELTA, MAX_LONGITUDE_DELTA, close_to};
pub(crate) use rank::rank;
pub use rank::{RankedSuggestion, SuggestionsPage};
pub use similarity::{JaroWinkler, SimilarityScorer};

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SearchError {
        #[error("per_page must be at least 1, got {0}")]
        InvalidPerPage(usize),
    }
    pub type Result<T> = std::result::Result<T, SearchError>;
}
