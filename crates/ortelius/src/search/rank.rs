//! Ranking and pagination of scored suggestions.

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use super::{Result, SearchError, close_to, similarity::SimilarityScorer};
use crate::{config::SuggestRequest, repository::PlaceRepository};

/// One scored suggestion in a response page.
///
/// A request-scoped pairing of a record's display fields with its computed
/// score; built fresh per ranking call and discarded with the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSuggestion {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Name similarity in `[0, 1]`.
    pub score: f64,
}

/// One page of ranked suggestions plus its pagination envelope.
///
/// The serialized field names are the response contract:
/// `{"suggestions": [..], "page": .., "per_page": .., "total_pages": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionsPage {
    pub suggestions: Vec<RankedSuggestion>,
    /// Zero-based page echoed from the request.
    pub page: usize,
    /// Page size echoed from the request.
    pub per_page: usize,
    /// Page count over the post-filter, pre-pagination candidate set.
    pub total_pages: usize,
}

/// Rank every candidate from the requested regions against the query and
/// slice out one page.
///
/// Candidates are narrowed by the proximity filter, scored against the
/// query, and sorted descending by score. The sort is stable, so equal
/// scores keep their pre-scoring order. A page at or past `total_pages`
/// yields an empty page rather than an error; a zero `per_page` is the one
/// caller error here, rejected before any division.
pub(crate) fn rank<R, S>(
    repository: &R,
    scorer: &S,
    request: &SuggestRequest,
    region_codes: &[&str],
) -> Result<SuggestionsPage>
where
    R: PlaceRepository,
    S: SimilarityScorer,
{
    if request.per_page == 0 {
        return Err(SearchError::InvalidPerPage(request.per_page));
    }

    let close = close_to(request.latitude, request.longitude);
    let ranked: Vec<RankedSuggestion> = repository
        .by_region_codes(region_codes)
        .into_iter()
        .filter(|record| close(record))
        .map(|record| RankedSuggestion {
            name: record.name.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            score: scorer.score(&record.name, &request.query),
        })
        .sorted_by(|a, b| b.score.total_cmp(&a.score))
        .collect();

    let total_pages = ranked.len().div_ceil(request.per_page);
    debug!(
        query = %request.query,
        candidates = ranked.len(),
        total_pages,
        "Ranked suggestion candidates"
    );

    let suggestions = if request.page >= total_pages {
        Vec::new()
    } else {
        ranked
            .into_iter()
            .skip(request.page * request.per_page)
            .take(request.per_page)
            .collect()
    };

    Ok(SuggestionsPage {
        suggestions,
        page: request.page,
        per_page: request.per_page,
        total_pages,
    })
}
