//! Core suggestion functionality.
//!
//! This module provides the main [`PlaceSuggester`] interface: it owns the
//! indexed place repository and a similarity scorer, and answers suggestion
//! requests with ranked, paginated results.
//!
//! # Quick Start
//!
//! ```rust
//! use ortelius::{InMemoryPlaceRepository, PlaceSuggester, SuggestRequest};
//! use ortelius::dataset::{PlaceRecord, RawRecord};
//!
//! let records = [
//!     RawRecord {
//!         id: "6167865",
//!         name: "Toronto",
//!         latitude: "43.70011",
//!         longitude: "-79.4163",
//!         region_code: "CA",
//!         ..RawRecord::default()
//!     },
//! ]
//! .map(PlaceRecord::from_raw);
//!
//! let suggester = PlaceSuggester::new(InMemoryPlaceRepository::from_records(records));
//! let page = suggester.suggest(&SuggestRequest::new("Tor"), &["CA"])?;
//! assert_eq!(page.suggestions[0].name, "Toronto");
//! # Ok::<(), ortelius::error::OrteliusError>(())
//! ```

use tracing::{info, instrument};

use ortelius_dataset::{DatasetInput, TsvRecordParser};

use crate::{
    config::SuggestRequest,
    error::Result,
    repository::InMemoryPlaceRepository,
    search::{JaroWinkler, SimilarityScorer, SuggestionsPage, rank},
};

/// The main suggestion engine over an in-memory gazetteer.
///
/// Built once at startup from a dataset (or a ready repository), then
/// queried concurrently: [`suggest`](Self::suggest) is read-only and
/// side-effect free. The scorer defaults to [`JaroWinkler`] but any
/// [`SimilarityScorer`] slots in via [`with_scorer`](Self::with_scorer).
///
/// # Examples
///
/// ```rust
/// use ortelius::{PlaceSuggester, SuggestRequest};
/// use ortelius::dataset::{DatasetInput, test_data};
///
/// let archive = test_data::zip_dataset("CA", &test_data::canada_rows())?;
/// let suggester = PlaceSuggester::from_inputs(vec![(
///     "CA".to_owned(),
///     DatasetInput::from_path(archive.path())?,
/// )])?;
///
/// let request = SuggestRequest::builder("Tor").near(43.7, -79.4).build();
/// let page = suggester.suggest(&request, &["CA"])?;
/// assert_eq!(page.suggestions[0].name, "Toronto");
/// # Ok::<(), ortelius::error::OrteliusError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlaceSuggester<S = JaroWinkler> {
    repository: InMemoryPlaceRepository,
    scorer: S,
}

impl PlaceSuggester {
    /// Wrap a ready repository with the default Jaro-Winkler scorer.
    #[must_use]
    pub fn new(repository: InMemoryPlaceRepository) -> Self {
        Self {
            repository,
            scorer: JaroWinkler,
        }
    }

    /// Build the repository from one dataset input per region and wrap it.
    ///
    /// Regions are read and merged in the supplied order.
    #[instrument(name = "Initialize PlaceSuggester", skip_all, level = "info")]
    pub fn from_inputs(inputs: Vec<(String, DatasetInput)>) -> Result<Self> {
        let t_init = std::time::Instant::now();
        let repository = InMemoryPlaceRepository::from_inputs(&TsvRecordParser::new(), inputs)?;
        info!(
            elapsed = ?t_init.elapsed(),
            records = repository.len(),
            "PlaceSuggester ready"
        );
        Ok(Self::new(repository))
    }

    /// Download the dump archive for each region code and build from those.
    ///
    /// ```rust,no_run
    /// use ortelius::PlaceSuggester;
    ///
    /// let suggester = PlaceSuggester::from_geonames_regions(&["CA"])?;
    /// # Ok::<(), ortelius::error::OrteliusError>(())
    /// ```
    #[cfg(feature = "download_data")]
    #[instrument(name = "Initialize PlaceSuggester from dump archives", level = "info")]
    pub fn from_geonames_regions(region_codes: &[&str]) -> Result<Self> {
        let t_init = std::time::Instant::now();
        let regions: Vec<(String, String)> = region_codes
            .iter()
            .map(|code| {
                (
                    (*code).to_owned(),
                    ortelius_dataset::geonames_dump_url(code),
                )
            })
            .collect();

        let repository = InMemoryPlaceRepository::from_urls(&TsvRecordParser::new(), &regions)?;
        info!(
            elapsed = ?t_init.elapsed(),
            records = repository.len(),
            "PlaceSuggester ready"
        );
        Ok(Self::new(repository))
    }
}

impl<S> PlaceSuggester<S>
where
    S: SimilarityScorer,
{
    /// Wrap a ready repository with a custom scorer.
    #[must_use]
    pub fn with_scorer(repository: InMemoryPlaceRepository, scorer: S) -> Self {
        Self { repository, scorer }
    }

    /// The underlying repository.
    #[must_use]
    pub fn repository(&self) -> &InMemoryPlaceRepository {
        &self.repository
    }

    /// Rank places from the given regions against the request.
    ///
    /// See [`SuggestionsPage`] for the response envelope. The only caller
    /// error is a zero `per_page`; everything else degrades gracefully.
    #[instrument(name = "Suggest places", skip(self), level = "info")]
    pub fn suggest(
        &self,
        request: &SuggestRequest,
        region_codes: &[&str],
    ) -> Result<SuggestionsPage> {
        Ok(rank(&self.repository, &self.scorer, request, region_codes)?)
    }
}
