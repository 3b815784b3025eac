//! Line-oriented parsing of gazetteer dump rows.

use crate::record::{PlaceRecord, RawRecord};

/// Parses one line of a dataset file into a [`PlaceRecord`].
///
/// Implementations are total: a ragged or garbage line still yields a record
/// (with absent fields), never an error.
pub trait RecordParser {
    fn parse(&self, line: &str) -> PlaceRecord;
}

/// Parser for the tab-separated gazetteer dump format.
///
/// Each row carries 19 positional columns: id, name, ascii name, alternate
/// names, latitude, longitude, feature class, feature code, region code,
/// alternate region code, four admin codes, population, elevation, dem,
/// time zone, last modified. Missing trailing columns read as blank and
/// surplus columns are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvRecordParser;

impl TsvRecordParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RecordParser for TsvRecordParser {
    fn parse(&self, line: &str) -> PlaceRecord {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |index: usize| fields.get(index).copied().unwrap_or("");

        PlaceRecord::from_raw(RawRecord {
            id: field(0),
            name: field(1),
            ascii_name: field(2),
            alternate_names: field(3),
            latitude: field(4),
            longitude: field(5),
            feature_class: field(6),
            feature_code: field(7),
            region_code: field(8),
            alternate_region_code: field(9),
            admin1: field(10),
            admin2: field(11),
            admin3: field(12),
            admin4: field(13),
            population: field(14),
            elevation: field(15),
            dem: field(16),
            time_zone: field(17),
            last_modified: field(18),
        })
    }
}
