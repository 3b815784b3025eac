//! Loading datasets from local files
//!
//! This example demonstrates the supported on-disk dataset layouts:
//! - A zip archive holding one `<REGION>.txt` entry per region
//! - A plain directory of region files
//! - Inspecting the repository the dataset was indexed into

use ortelius::dataset::{DatasetInput, test_data};
use ortelius::{PlaceRepository, PlaceSuggester, SuggestRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A zip archive, as served by the GeoNames dump exports. The test_data
    // helpers stand in for a real download here.
    let archive = test_data::zip_dataset("CA", &test_data::canada_rows())?;
    let input = DatasetInput::from_path(archive.path())?;
    println!("Archive entries: {:?}", input.file_names());

    let suggester = PlaceSuggester::from_inputs(vec![("CA".to_owned(), input)])?;
    println!("Indexed {} Canadian places\n", suggester.repository().len());

    // A directory of region files works the same way, and one directory can
    // feed several regions.
    let dir = test_data::directory_dataset(&[
        ("CA", test_data::canada_rows()),
        ("US", test_data::us_rows()),
    ])?;
    let suggester = PlaceSuggester::from_inputs(vec![
        ("CA".to_owned(), DatasetInput::from_path(dir.path())?),
        ("US".to_owned(), DatasetInput::from_path(dir.path())?),
    ])?;

    let repository = suggester.repository();
    println!("Indexed {} places across two regions", repository.len());
    if let Some(toronto) = repository.by_id("6167865") {
        println!("Id 6167865 is {}", toronto.name);
    }
    println!(
        "US region holds {} places",
        repository.by_region_codes(&["US"]).len()
    );

    // Queries scope to whichever regions the caller names.
    let page = suggester.suggest(&SuggestRequest::new("Bos"), &["US"])?;
    println!("\nTop match for 'Bos' in US: {}", page.suggestions[0].name);

    Ok(())
}
