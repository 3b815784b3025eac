//! Request options and pagination
//!
//! This example demonstrates the `SuggestRequest` builder:
//! - Defaults (first page, ten suggestions per page)
//! - Location-aware requests
//! - Walking a result set page by page
//! - The one request shape that is rejected outright

use ortelius::dataset::{DatasetInput, test_data};
use ortelius::{PlaceSuggester, SuggestRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])?;
    let suggester = PlaceSuggester::from_inputs(vec![(
        "CA".to_owned(),
        DatasetInput::from_path(dir.path())?,
    )])?;

    // Defaults: page 0, ten per page, no location.
    let page = suggester.suggest(&SuggestRequest::new("on"), &["CA"])?;
    println!("Default request returned {} suggestions", page.suggestions.len());

    // Anchoring the request biases nothing in the scores, it only narrows
    // the candidate set to the surrounding bounding box.
    let request = SuggestRequest::builder("on").near(43.7, -79.4).build();
    let page = suggester.suggest(&request, &["CA"])?;
    println!("Near Toronto: {} candidates survive the box", page.suggestions.len());

    // Page through everything two at a time. The ordering is identical
    // across pages, so concatenating them walks the full ranking.
    println!("\nAll matches, two per page:");
    let mut page_number = 0;
    loop {
        let request = SuggestRequest::builder("on")
            .page(page_number)
            .per_page(2)
            .build();
        let page = suggester.suggest(&request, &["CA"])?;
        if page.suggestions.is_empty() {
            break;
        }
        for suggestion in &page.suggestions {
            println!(
                "  page {}: {} ({:.3})",
                page.page, suggestion.name, suggestion.score
            );
        }
        page_number += 1;
    }

    // per_page 0 cannot be paginated and is the one rejected request.
    let request = SuggestRequest::builder("on").per_page(0).build();
    match suggester.suggest(&request, &["CA"]) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(error) => println!("\nRejected as expected: {error}"),
    }

    Ok(())
}
