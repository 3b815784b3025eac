//! Gazetteer dataset handling for the Ortelius place suggestion library.
//!
//! This crate covers everything between a raw data source and a validated
//! [`PlaceRecord`]: the record model and its accept-and-degrade field
//! parsing, the tab-separated line parser, uniform access to zip archives
//! and unarchived directories, and (behind the `download_data` feature)
//! streaming downloads of the public dump archives.
//!
//! Region data follows the dump convention: region `CA`'s rows live in
//! `CA.txt`, shipped inside `CA.zip`.
//!
//! ```rust
//! use ortelius_dataset::{DatasetInput, RecordParser, TsvRecordParser, test_data};
//!
//! let archive = test_data::zip_dataset("CA", &test_data::canada_rows())?;
//! let mut input = DatasetInput::from_path(archive.path())?;
//!
//! let parser = TsvRecordParser::new();
//! let records: Vec<_> = input
//!     .read_to_string("CA.txt")?
//!     .lines()
//!     .map(|line| parser.parse(line))
//!     .collect();
//! assert!(records.iter().any(|record| record.name == "Toronto"));
//! # Ok::<(), ortelius_dataset::DatasetError>(())
//! ```

pub mod error;
#[cfg(feature = "download_data")]
pub mod fetch;
mod input;
mod parser;
mod record;
pub mod test_data;

pub use error::{DatasetError, Result};
pub use input::DatasetInput;
pub use parser::{RecordParser, TsvRecordParser};
pub use record::{PlaceRecord, RawRecord};

/// Base URL of the public gazetteer dump exports.
pub const GEONAMES_DUMP_BASE: &str = "https://download.geonames.org/export/dump";

/// Canonical dump archive URL for one region code.
///
/// ```rust
/// assert_eq!(
///     ortelius_dataset::geonames_dump_url("CA"),
///     "https://download.geonames.org/export/dump/CA.zip"
/// );
/// ```
#[must_use]
pub fn geonames_dump_url(region_code: &str) -> String {
    format!("{GEONAMES_DUMP_BASE}/{region_code}.zip")
}
