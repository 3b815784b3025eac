//! Ortelius - Place Name Suggestions
//!
//! Ortelius answers "which known places best match this partial name,
//! optionally near this location". It indexes a gazetteer in memory once at
//! startup, then serves autocomplete-style queries: candidates are narrowed
//! by a coarse proximity box, scored with Jaro-Winkler name similarity,
//! sorted descending and paginated.
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
//!     RawRecord {
//!         id: "6077243",
//!         name: "Montreal",
//!         latitude: "45.50884",
//!         longitude: "-73.58781",
//!         region_code: "CA",
//!         ..RawRecord::default()
//!     },
//! ]
//! .map(PlaceRecord::from_raw);
//!
//! let suggester = PlaceSuggester::new(InMemoryPlaceRepository::from_records(records));
//!
//! let request = SuggestRequest::builder("Tor").near(45.0, -75.0).build();
//! let page = suggester.suggest(&request, &["CA"])?;
//!
//! assert_eq!(page.suggestions[0].name, "Toronto");
//! assert_eq!(page.total_pages, 1);
//! # Ok::<(), ortelius::error::OrteliusError>(())
//! ```
//!
//! # Features
//!
//! - **Validated records**: malformed dataset fields degrade to absent
//!   values instead of dropping whole rows
//! - **Fast lookups**: id and region-code indexes built once, read-only and
//!   lock-free afterwards
//! - **Prefix-friendly scoring**: Jaro-Winkler similarity, swappable through
//!   the [`SimilarityScorer`] trait
//! - **Ready-made pagination**: stable descending order with a
//!   `total_pages` envelope, serializable straight to the JSON response
//!   shape
//!
//! # Data
//!
//! Datasets load from zip archives or plain directories of `<REGION>.txt`
//! files, and with the `download_data` feature (default) directly from the
//! public GeoNames dump exports.

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
mod repository;
mod search;

pub use core::PlaceSuggester;

pub use config::{SuggestRequest, SuggestRequestBuilder};
pub use ortelius_dataset as dataset;
pub use ortelius_dataset::{DatasetInput, PlaceRecord, RawRecord, RecordParser, TsvRecordParser};
pub use repository::{InMemoryPlaceRepository, PlaceRepository};
pub use search::{
    JaroWinkler, MAX_LATITUDE_DELTA, MAX_LONGITUDE_DELTA, RankedSuggestion, SearchError,
    SimilarityScorer, SuggestionsPage, close_to,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Ortelius library.
///
/// Sets up structured logging with configurable levels and filtering. Call
/// this once at the start of your application; later calls are no-ops.
///
/// # Arguments
///
/// * `level` - The minimum log level to display
///
/// # Examples
///
/// ```rust
/// use ortelius::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), ortelius::error::OrteliusError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::OrteliusError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse().unwrap());

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}
