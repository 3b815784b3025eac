//! The gazetteer place record and its validating construction.
//!
//! Records are built from raw string fields with an accept-and-degrade
//! policy: every optional field is parsed independently, and a value that
//! fails to parse (or falls out of range) simply ends up absent. A malformed
//! field never blocks construction of the rest of the record, so one bad
//! column upstream cannot knock an otherwise valid place out of the dataset.

use std::{ops::RangeInclusive, str::FromStr};

use ahash::AHashSet;
use chrono::NaiveDate;
use chrono_tz::Tz;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%d";

/// Raw string fields for one place, in the 19-column gazetteer dump order.
///
/// All fields may be blank. This is the input to [`PlaceRecord::from_raw`];
/// parsers produce one of these per source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub ascii_name: &'a str,
    pub alternate_names: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub feature_class: &'a str,
    pub feature_code: &'a str,
    pub region_code: &'a str,
    pub alternate_region_code: &'a str,
    pub admin1: &'a str,
    pub admin2: &'a str,
    pub admin3: &'a str,
    pub admin4: &'a str,
    pub population: &'a str,
    pub elevation: &'a str,
    pub dem: &'a str,
    pub time_zone: &'a str,
    pub last_modified: &'a str,
}

/// One geographic place, immutable once constructed.
///
/// Optional fields are either well formed or absent, never a partially
/// parsed value. Equality covers the full field set, so two records with the
/// same id but different data compare unequal.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    /// Stable identifier. Blank in the source data means `None`, and such
    /// records are never reachable by id lookup.
    pub id: Option<String>,
    pub name: String,
    pub ascii_name: String,
    /// Deduplicated alternate names, split from a comma-separated field.
    pub alternate_names: AHashSet<String>,
    /// Degrees in `[-90, 90]`; out-of-range or unparsable input is absent.
    pub latitude: Option<f64>,
    /// Degrees in `[-180, 180]`; out-of-range or unparsable input is absent.
    pub longitude: Option<f64>,
    pub feature_class: String,
    pub feature_code: String,
    /// Primary region (country) code used for repository partitioning.
    pub region_code: String,
    pub alternate_region_code: String,
    pub admin1: String,
    pub admin2: String,
    pub admin3: String,
    pub admin4: String,
    pub population: Option<u64>,
    /// Metres. Sentinel values such as `-9999` pass through verbatim.
    pub elevation: Option<i32>,
    /// Digital elevation model value, metres.
    pub dem: Option<i32>,
    /// IANA time zone; unknown identifiers are absent.
    pub time_zone: Option<Tz>,
    /// `YYYY-MM-DD` modification date from the source dump.
    pub last_modified: Option<NaiveDate>,
}

impl PlaceRecord {
    /// Build a record from raw string fields.
    ///
    /// Never fails: each optional field falls back to absent on its own, and
    /// building twice from the same input yields equal records.
    #[must_use]
    pub fn from_raw(raw: RawRecord<'_>) -> Self {
        Self {
            id: non_blank(raw.id),
            name: raw.name.to_owned(),
            ascii_name: raw.ascii_name.to_owned(),
            alternate_names: split_alternate_names(raw.alternate_names),
            latitude: parse_in_range(raw.latitude, &LATITUDE_RANGE),
            longitude: parse_in_range(raw.longitude, &LONGITUDE_RANGE),
            feature_class: raw.feature_class.to_owned(),
            feature_code: raw.feature_code.to_owned(),
            region_code: raw.region_code.to_owned(),
            alternate_region_code: raw.alternate_region_code.to_owned(),
            admin1: raw.admin1.to_owned(),
            admin2: raw.admin2.to_owned(),
            admin3: raw.admin3.to_owned(),
            admin4: raw.admin4.to_owned(),
            population: parse_or_absent(raw.population),
            elevation: parse_or_absent(raw.elevation),
            dem: parse_or_absent(raw.dem),
            time_zone: parse_or_absent(raw.time_zone),
            last_modified: parse_date(raw.last_modified),
        }
    }

    /// Both coordinates, when the record has a full position.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

fn non_blank(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_owned())
}

fn split_alternate_names(raw: &str) -> AHashSet<String> {
    raw.split(',')
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_or_absent<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

fn parse_in_range(raw: &str, range: &RangeInclusive<f64>) -> Option<f64> {
    parse_or_absent(raw).filter(|degrees| range.contains(degrees))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, LAST_MODIFIED_FORMAT).ok()
}
