//! Basic place suggestions
//!
//! This example demonstrates the fundamental suggestion operations:
//! - Building a suggester over in-memory records
//! - Running partial-name queries
//! - Reading the ranked, paginated response

use ortelius::dataset::{PlaceRecord, RawRecord};
use ortelius::{InMemoryPlaceRepository, PlaceSuggester, SuggestRequest, SuggestionsPage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = [
        ("6167865", "Toronto", "43.70011", "-79.4163"),
        ("6077243", "Montreal", "45.50884", "-73.58781"),
        ("6325494", "Quebec", "46.81228", "-71.21454"),
        ("6173331", "Vancouver", "49.24966", "-123.11934"),
    ]
    .map(|(id, name, latitude, longitude)| {
        PlaceRecord::from_raw(RawRecord {
            id,
            name,
            ascii_name: name,
            latitude,
            longitude,
            feature_class: "P",
            feature_code: "PPL",
            region_code: "CA",
            ..RawRecord::default()
        })
    });

    let suggester = PlaceSuggester::new(InMemoryPlaceRepository::from_records(records));

    // Partial name only: every record in the region is a candidate.
    println!("Suggestions for 'Tor':");
    let page = suggester.suggest(&SuggestRequest::new("Tor"), &["CA"])?;
    print_page(&page);

    // The same dataset queried near Montreal. Vancouver sits far outside
    // the longitude window, so it is not a candidate at all.
    println!("\nSuggestions for 'Van' near Montreal:");
    let request = SuggestRequest::builder("Van").near(45.5, -73.6).build();
    let page = suggester.suggest(&request, &["CA"])?;
    print_page(&page);

    Ok(())
}

fn print_page(page: &SuggestionsPage) {
    for (i, suggestion) in page.suggestions.iter().enumerate() {
        println!(
            "  {}. {} - Score: {:.3}, At: ({:.5}, {:.5})",
            i + 1,
            suggestion.name,
            suggestion.score,
            suggestion.latitude.unwrap_or(f64::NAN),
            suggestion.longitude.unwrap_or(f64::NAN),
        );
    }
    println!(
        "  (page {} of {}, {} per page)",
        page.page, page.total_pages, page.per_page
    );
}
