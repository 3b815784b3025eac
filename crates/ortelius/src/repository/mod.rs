//! In-memory storage and lookup of place records.
//!
//! The repository is built once at startup and read-only afterwards, so it
//! can be shared freely across serving threads. Records are indexed two
//! ways: by identifier (unique, first write wins) and by primary region
//! code (one region maps to many records, in first-seen order).

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use ortelius_dataset::{DatasetError, DatasetInput, PlaceRecord, RecordParser};

/// Read access to an indexed set of place records.
///
/// Kept as a trait so ranking can run against fakes in tests, without a
/// real dataset behind it.
pub trait PlaceRepository {
    /// Look up a record by its stable identifier.
    fn by_id(&self, id: &str) -> Option<&PlaceRecord>;

    /// All records whose primary region code is one of `codes`,
    /// concatenated in the order the codes are supplied. Unknown codes
    /// contribute nothing.
    fn by_region_codes(&self, codes: &[&str]) -> Vec<&PlaceRecord>;
}

/// Place repository backed by plain in-memory indexes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlaceRepository {
    /// Sole owner of every record, in first-insert order.
    records: Vec<PlaceRecord>,
    by_id: AHashMap<String, usize>,
    by_region: AHashMap<String, Vec<usize>>,
}

impl InMemoryPlaceRepository {
    /// Index an iterator of records.
    ///
    /// This is the single merge point for all construction paths. Records
    /// without an id are dropped (nothing could ever look them up), and a
    /// duplicate id keeps the first record seen.
    pub fn from_records(records: impl IntoIterator<Item = PlaceRecord>) -> Self {
        let mut backing: Vec<PlaceRecord> = Vec::new();
        let mut by_id: AHashMap<String, usize> = AHashMap::new();
        let mut dropped_blank_id = 0_usize;
        let mut dropped_duplicate_id = 0_usize;

        for record in records {
            let Some(id) = record.id.clone() else {
                dropped_blank_id += 1;
                continue;
            };
            match by_id.entry(id) {
                Entry::Occupied(_) => dropped_duplicate_id += 1,
                Entry::Vacant(slot) => {
                    slot.insert(backing.len());
                    backing.push(record);
                }
            }
        }
        if dropped_blank_id > 0 || dropped_duplicate_id > 0 {
            debug!(
                dropped_blank_id,
                dropped_duplicate_id, "Dropped unindexable records"
            );
        }

        let mut by_region: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (index, record) in backing.iter().enumerate() {
            by_region
                .entry(record.region_code.clone())
                .or_default()
                .push(index);
        }

        info!(
            records = backing.len(),
            regions = by_region.len(),
            "Built place repository"
        );
        Self {
            records: backing,
            by_id,
            by_region,
        }
    }

    /// Read, parse and index one dataset input per region.
    ///
    /// Regions merge in the supplied order, which makes first-write-wins
    /// deterministic across regions. Line parsing within a region is
    /// parallel but order preserving. An unreadable input is a fatal
    /// construction error.
    #[instrument(name = "Build place repository", skip_all, level = "info")]
    pub fn from_inputs<P>(
        parser: &P,
        inputs: Vec<(String, DatasetInput)>,
    ) -> Result<Self, DatasetError>
    where
        P: RecordParser + Sync,
    {
        let mut records: Vec<PlaceRecord> = Vec::new();
        for (region_code, mut input) in inputs {
            let contents = input.read_to_string(&format!("{region_code}.txt"))?;
            let mut region_records: Vec<PlaceRecord> = contents
                .par_lines()
                .map(|line| parser.parse(line))
                .collect();
            debug!(
                region_code,
                records = region_records.len(),
                "Parsed region file"
            );
            records.append(&mut region_records);
        }
        Ok(Self::from_records(records))
    }

    /// Download one dump archive per region and index them all.
    ///
    /// Downloads run concurrently; the merge still follows the order of
    /// `regions`.
    #[cfg(feature = "download_data")]
    pub fn from_urls<P>(parser: &P, regions: &[(String, String)]) -> Result<Self, DatasetError>
    where
        P: RecordParser + Sync,
    {
        let urls: Vec<&str> = regions.iter().map(|(_, url)| url.as_str()).collect();
        let downloads = ortelius_dataset::fetch::fetch_archives(&urls)?;

        let inputs = regions
            .iter()
            .zip(downloads)
            .map(|((region_code, _), download)| {
                Ok((region_code.clone(), DatasetInput::from_download(download)?))
            })
            .collect::<Result<Vec<_>, DatasetError>>()?;
        Self::from_inputs(parser, inputs)
    }

    /// Snapshot of every indexed record keyed by id.
    ///
    /// The map is built fresh on each call; callers can mutate it without
    /// touching the repository's own indexes.
    #[must_use]
    pub fn by_id_map(&self) -> AHashMap<&str, &PlaceRecord> {
        self.records
            .iter()
            .filter_map(|record| record.id.as_deref().map(|id| (id, record)))
            .collect()
    }

    /// All records in first-insert order.
    pub fn iter(&self) -> impl Iterator<Item = &PlaceRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PlaceRepository for InMemoryPlaceRepository {
    fn by_id(&self, id: &str) -> Option<&PlaceRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    fn by_region_codes(&self, codes: &[&str]) -> Vec<&PlaceRecord> {
        codes
            .iter()
            .filter_map(|code| self.by_region.get(*code))
            .flatten()
            .map(|&index| &self.records[index])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ortelius_dataset::{RawRecord, TsvRecordParser, test_data};

    use super::*;

    fn record(id: &str, name: &str, region_code: &str) -> PlaceRecord {
        PlaceRecord::from_raw(RawRecord {
            id,
            name,
            ascii_name: name,
            region_code,
            ..RawRecord::default()
        })
    }

    #[test]
    fn test_by_id_lookup() {
        let repo = InMemoryPlaceRepository::from_records([
            record("1", "toronto", "CA"),
            record("2", "montreal", "CA"),
        ]);

        assert_eq!(repo.by_id("1").map(|r| r.name.as_str()), Some("toronto"));
        assert_eq!(repo.by_id("2").map(|r| r.name.as_str()), Some("montreal"));
        assert!(repo.by_id("99").is_none());
    }

    #[test]
    fn test_first_write_wins_on_duplicate_ids() {
        let repo = InMemoryPlaceRepository::from_records([
            record("X", "first", "CA"),
            record("X", "second", "CA"),
        ]);

        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.by_id("X").map(|r| r.name.as_str()),
            Some("first"),
            "the earliest record for an id should be kept"
        );
    }

    #[test]
    fn test_records_without_id_are_dropped() {
        let repo = InMemoryPlaceRepository::from_records([
            record("", "ghost", "CA"),
            record("1", "toronto", "CA"),
        ]);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.by_region_codes(&["CA"]).len(), 1);
    }

    #[test]
    fn test_by_region_codes_preserves_code_and_insertion_order() {
        let repo = InMemoryPlaceRepository::from_records([
            record("1", "toronto", "CA"),
            record("2", "boston", "US"),
            record("3", "montreal", "CA"),
        ]);

        let names: Vec<&str> = repo
            .by_region_codes(&["US", "CA"])
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["boston", "toronto", "montreal"],
            "regions should concatenate in supplied order, insertion order within each"
        );
    }

    #[test]
    fn test_unknown_region_codes_contribute_nothing() {
        let repo = InMemoryPlaceRepository::from_records([record("1", "toronto", "CA")]);

        assert!(repo.by_region_codes(&["ZZ"]).is_empty());
        assert_eq!(repo.by_region_codes(&["ZZ", "CA"]).len(), 1);
    }

    #[test]
    fn test_by_id_map_is_a_detached_snapshot() {
        let repo = InMemoryPlaceRepository::from_records([
            record("1", "toronto", "CA"),
            record("2", "montreal", "CA"),
        ]);

        let mut snapshot = repo.by_id_map();
        assert_eq!(snapshot.len(), 2);
        snapshot.clear();

        assert_eq!(repo.len(), 2, "clearing the snapshot must not touch the repository");
        assert!(repo.by_id("1").is_some());
    }

    #[test]
    fn test_empty_repository() {
        let repo = InMemoryPlaceRepository::from_records(Vec::new());
        assert!(repo.is_empty());
        assert!(repo.by_region_codes(&["CA"]).is_empty());
    }

    #[test]
    fn test_from_inputs_reads_region_files() {
        let dir = test_data::directory_dataset(&[
            ("CA", test_data::canada_rows()),
            ("US", test_data::us_rows()),
        ])
        .unwrap();
        let inputs = vec![
            ("CA".to_owned(), DatasetInput::from_path(dir.path()).unwrap()),
            ("US".to_owned(), DatasetInput::from_path(dir.path()).unwrap()),
        ];

        let repo = InMemoryPlaceRepository::from_inputs(&TsvRecordParser::new(), inputs).unwrap();

        assert_eq!(repo.len(), test_data::canada_rows().len() + test_data::us_rows().len());
        assert_eq!(
            repo.by_region_codes(&["CA"]).len(),
            test_data::canada_rows().len()
        );
        assert_eq!(
            repo.by_id("6167865").map(|r| r.name.as_str()),
            Some("Toronto")
        );
    }

    #[test]
    fn test_from_inputs_reads_zip_archives() {
        let archive = test_data::zip_dataset("CA", &test_data::canada_rows()).unwrap();
        let inputs = vec![(
            "CA".to_owned(),
            DatasetInput::from_path(archive.path()).unwrap(),
        )];

        let repo = InMemoryPlaceRepository::from_inputs(&TsvRecordParser::new(), inputs).unwrap();
        assert_eq!(repo.len(), test_data::canada_rows().len());
    }

    #[test]
    fn test_from_inputs_first_write_wins_across_regions() {
        let shared_id = "42";
        let dir = test_data::directory_dataset(&[
            (
                "CA",
                vec![test_data::place_row(shared_id, "toronto", "43.7", "-79.4", "CA")],
            ),
            (
                "US",
                vec![test_data::place_row(shared_id, "boston", "42.4", "-71.1", "US")],
            ),
        ])
        .unwrap();
        let inputs = vec![
            ("CA".to_owned(), DatasetInput::from_path(dir.path()).unwrap()),
            ("US".to_owned(), DatasetInput::from_path(dir.path()).unwrap()),
        ];

        let repo = InMemoryPlaceRepository::from_inputs(&TsvRecordParser::new(), inputs).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.by_id(shared_id).map(|r| r.name.as_str()),
            Some("toronto"),
            "the region supplied first should win the duplicate id"
        );
    }

    #[test]
    fn test_from_inputs_missing_region_file_is_fatal() {
        let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())]).unwrap();
        let inputs = vec![
            ("GB".to_owned(), DatasetInput::from_path(dir.path()).unwrap()),
        ];

        let err = InMemoryPlaceRepository::from_inputs(&TsvRecordParser::new(), inputs)
            .unwrap_err();
        assert!(
            matches!(err, DatasetError::FileNotFound(ref name) if name == "GB.txt"),
            "got {err:?}"
        );
    }
}
