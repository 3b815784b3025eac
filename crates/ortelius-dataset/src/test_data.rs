//! Reusable sample datasets for tests and examples.
//!
//! Provides realistic gazetteer rows plus helpers that lay them out the two
//! ways real datasets arrive: as zip archives and as unarchived directories.

use std::{fs::File, io::Write, path::Path};

use tempfile::{NamedTempFile, TempDir};
use tracing::debug;
use zip::{ZipWriter, write::SimpleFileOptions};

use crate::error::Result;

/// Build one tab-separated row from explicit columns.
#[must_use]
pub fn tsv_row(columns: &[&str]) -> String {
    columns.join("\t")
}

/// A minimal 19-column row with only the fields most tests care about.
#[must_use]
pub fn place_row(
    id: &str,
    name: &str,
    latitude: &str,
    longitude: &str,
    region_code: &str,
) -> String {
    tsv_row(&[
        id, name, name, "", latitude, longitude, "P", "PPL", region_code, "", "", "", "", "", "",
        "", "", "", "",
    ])
}

/// Realistic rows for a `CA.txt` region file.
#[must_use]
pub fn canada_rows() -> Vec<String> {
    [
        [
            "6167865", "Toronto", "Toronto", "YTO,Toronto City", "43.70011", "-79.4163", "P",
            "PPL", "CA", "", "08", "", "", "", "2600000", "175", "175", "America/Toronto",
            "2019-02-26",
        ],
        [
            "6077243", "Montréal", "Montreal", "YMQ,Montreal", "45.50884", "-73.58781", "P",
            "PPL", "CA", "", "10", "", "", "", "1600000", "", "216", "America/Toronto",
            "2019-02-26",
        ],
        [
            "6325494", "Québec", "Quebec", "Quebec City", "46.81228", "-71.21454", "P", "PPLA",
            "CA", "", "10", "", "", "", "528595", "", "54", "America/Toronto", "2019-02-26",
        ],
        [
            "6173331", "Vancouver", "Vancouver", "YVR", "49.24966", "-123.11934", "P", "PPL",
            "CA", "", "02", "", "", "", "600000", "", "70", "America/Vancouver", "2019-02-26",
        ],
        [
            "5992996", "Kitchener", "Kitchener", "", "43.42537", "-80.5112", "P", "PPL", "CA",
            "", "08", "", "", "", "233700", "", "326", "America/Toronto", "2019-02-26",
        ],
    ]
    .iter()
    .map(|columns| tsv_row(columns))
    .collect()
}

/// Realistic rows for a `US.txt` region file.
#[must_use]
pub fn us_rows() -> Vec<String> {
    [
        [
            "5128581", "New York City", "New York City", "NYC,Big Apple", "40.71427",
            "-74.00597", "P", "PPL", "US", "", "NY", "061", "", "", "8175133", "10", "57",
            "America/New_York", "2019-02-26",
        ],
        [
            "4930956", "Boston", "Boston", "", "42.35843", "-71.05977", "P", "PPLA", "US", "",
            "MA", "025", "", "", "667137", "38", "38", "America/New_York", "2019-02-26",
        ],
        [
            "5391959", "San Francisco", "San Francisco", "SF", "37.77493", "-122.41942", "P",
            "PPLA2", "US", "", "CA", "075", "", "", "864816", "16", "28",
            "America/Los_Angeles", "2019-02-26",
        ],
    ]
    .iter()
    .map(|columns| tsv_row(columns))
    .collect()
}

/// Write one region file (`<code>.txt`) into `dir`.
pub fn write_region_file(dir: &Path, region_code: &str, rows: &[String]) -> Result<()> {
    let mut file = File::create(dir.join(format!("{region_code}.txt")))?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(())
}

/// Create a temporary directory dataset holding one file per region.
pub fn directory_dataset(regions: &[(&str, Vec<String>)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (region_code, rows) in regions {
        write_region_file(dir.path(), region_code, rows)?;
    }
    debug!(dir = ?dir.path(), regions = regions.len(), "Created directory dataset");
    Ok(dir)
}

/// Create a temporary zip dataset for one region, laid out like the public
/// dump archives: `<code>.txt` next to a `readme.txt`.
pub fn zip_dataset(region_code: &str, rows: &[String]) -> Result<NamedTempFile> {
    let archive_file = NamedTempFile::with_suffix(".zip")?;
    let mut writer = ZipWriter::new(File::create(archive_file.path())?);
    let options = SimpleFileOptions::default();

    writer.start_file(format!("{region_code}.txt"), options)?;
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.start_file("readme.txt", options)?;
    writeln!(writer, "Sample dataset for region {region_code}")?;
    writer.finish()?;

    debug!(path = ?archive_file.path(), region_code, "Created zip dataset");
    Ok(archive_file)
}

/// Like [`zip_dataset`], but with entries nested under a top-level folder,
/// as some archives are packaged.
pub fn nested_zip_dataset(region_code: &str, rows: &[String]) -> Result<NamedTempFile> {
    let archive_file = NamedTempFile::with_suffix(".zip")?;
    let mut writer = ZipWriter::new(File::create(archive_file.path())?);
    let options = SimpleFileOptions::default();

    writer.add_directory(format!("{region_code}/"), options)?;
    writer.start_file(format!("{region_code}/{region_code}.txt"), options)?;
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.finish()?;

    Ok(archive_file)
}
