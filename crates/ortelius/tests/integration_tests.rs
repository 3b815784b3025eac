//! Integration tests for Ortelius place suggestions
//!
//! These tests run against the full public API: datasets are staged on disk
//! with the test_data helpers, indexed through `PlaceSuggester`, and queried
//! end to end down to the serialized response shape.

use ortelius::dataset::{DatasetInput, test_data};
use ortelius::error::OrteliusError;
use ortelius::{PlaceRepository, PlaceSuggester, SearchError, SuggestRequest};

fn setup_test_env() {
    let _ = ortelius::init_logging(tracing::Level::WARN);
}

fn region_input(dir: &tempfile::TempDir, region_code: &str) -> (String, DatasetInput) {
    (
        region_code.to_owned(),
        DatasetInput::from_path(dir.path()).expect("Directory input should open"),
    )
}

#[test]
fn test_full_workflow() {
    setup_test_env();

    // Three places, one of them outside the proximity box of the request.
    let rows = vec![
        test_data::place_row("1", "toronto", "42.0", "54.6", "CA"),
        test_data::place_row("2", "montreal", "55.0", "50.0", "CA"),
        test_data::place_row("3", "quebec", "90.0", "55.4", "CA"),
    ];
    let dir = test_data::directory_dataset(&[("CA", rows)]).expect("Should stage dataset");

    let suggester = PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
        .expect("Should create suggester");
    assert_eq!(suggester.repository().len(), 3, "All rows should be indexed");

    // A user at (50.0, 55.4): quebec is 40 degrees of latitude away and is
    // never scored; the other two rank by name similarity.
    let request = SuggestRequest::builder("tor").near(50.0, 55.4).build();
    let page = suggester
        .suggest(&request, &["CA"])
        .expect("Suggest should work");

    let names: Vec<_> = page.suggestions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["toronto", "montreal"], "Best match first, quebec boxed out");
    assert!(
        page.suggestions.windows(2).all(|w| w[0].score >= w[1].score),
        "Scores should descend"
    );
    assert!(
        page.suggestions.iter().all(|s| s.score > 0.0 && s.score <= 1.0),
        "Scores should stay in (0, 1]"
    );

    assert_eq!(page.page, 0);
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_json_response_shape() {
    setup_test_env();

    let rows = vec![
        test_data::place_row("1", "toronto", "42.0", "54.6", "CA"),
        test_data::place_row("2", "nowhere", "", "", "CA"),
    ];
    let dir = test_data::directory_dataset(&[("CA", rows)]).expect("Should stage dataset");
    let suggester = PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
        .expect("Should create suggester");

    let page = suggester
        .suggest(&SuggestRequest::new("tor"), &["CA"])
        .expect("Suggest should work");
    let value = serde_json::to_value(&page).expect("Page should serialize");

    let envelope = value.as_object().expect("Response should be an object");
    assert_eq!(envelope.len(), 4, "Envelope carries exactly four fields");
    for key in ["suggestions", "page", "per_page", "total_pages"] {
        assert!(envelope.contains_key(key), "Envelope should carry '{key}'");
    }
    assert_eq!(value["page"], 0);
    assert_eq!(value["per_page"], 10);
    assert_eq!(value["total_pages"], 1);

    let suggestions = value["suggestions"]
        .as_array()
        .expect("Suggestions should be an array");
    assert_eq!(suggestions.len(), 2);
    for suggestion in suggestions {
        let fields = suggestion.as_object().expect("Suggestion should be an object");
        assert_eq!(fields.len(), 4, "Suggestion carries exactly four fields");
        for key in ["name", "latitude", "longitude", "score"] {
            assert!(fields.contains_key(key), "Suggestion should carry '{key}'");
        }
    }

    // Records without coordinates serialize them as null rather than being
    // dropped from the response.
    let nowhere = suggestions
        .iter()
        .find(|s| s["name"] == "nowhere")
        .expect("nowhere should be suggested");
    assert!(nowhere["latitude"].is_null());
    assert!(nowhere["longitude"].is_null());

    let toronto = suggestions
        .iter()
        .find(|s| s["name"] == "toronto")
        .expect("toronto should be suggested");
    assert_eq!(toronto["latitude"], 42.0);
    assert_eq!(toronto["longitude"], 54.6);
}

#[test]
fn test_pagination_is_exhaustive_and_stable() {
    setup_test_env();

    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])
        .expect("Should stage dataset");
    let suggester = PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
        .expect("Should create suggester");

    let full = suggester
        .suggest(&SuggestRequest::new("to"), &["CA"])
        .expect("Suggest should work");
    assert_eq!(full.suggestions.len(), 5, "All five places fit one default page");

    // Two per page: 5 candidates means three pages, the last one short.
    let mut walked = Vec::new();
    for page_number in 0..3 {
        let request = SuggestRequest::builder("to")
            .page(page_number)
            .per_page(2)
            .build();
        let page = suggester
            .suggest(&request, &["CA"])
            .expect("Suggest should work");
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, page_number);
        walked.extend(page.suggestions);
    }

    let full_names: Vec<_> = full.suggestions.iter().map(|s| s.name.as_str()).collect();
    let walked_names: Vec<_> = walked.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        walked_names, full_names,
        "Concatenated pages should replay the full ranking"
    );

    // One past the end: an empty page that still reports the real totals.
    let request = SuggestRequest::builder("to").page(3).per_page(2).build();
    let past_the_end = suggester
        .suggest(&request, &["CA"])
        .expect("Suggest should work");
    assert!(past_the_end.suggestions.is_empty());
    assert_eq!(past_the_end.page, 3);
    assert_eq!(past_the_end.per_page, 2);
    assert_eq!(past_the_end.total_pages, 3);
}

#[test]
fn test_first_write_wins_across_regions() {
    setup_test_env();

    let regions = [
        ("AA", vec![test_data::place_row("42", "toronto", "42.0", "54.6", "AA")]),
        ("BB", vec![test_data::place_row("42", "boston", "41.0", "54.0", "BB")]),
    ];
    let dir = test_data::directory_dataset(&regions).expect("Should stage dataset");

    // AA merges before BB, so its record claims id 42.
    let suggester =
        PlaceSuggester::from_inputs(vec![region_input(&dir, "AA"), region_input(&dir, "BB")])
            .expect("Should create suggester");
    assert_eq!(suggester.repository().len(), 1);
    assert_eq!(
        suggester.repository().by_id("42").map(|r| r.name.as_str()),
        Some("toronto")
    );

    let page = suggester
        .suggest(&SuggestRequest::new("toronto"), &["AA", "BB"])
        .expect("Suggest should work");
    let names: Vec<_> = page.suggestions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["toronto"], "The duplicate id should surface only once");

    // Reversing the merge order flips the winner.
    let reversed =
        PlaceSuggester::from_inputs(vec![region_input(&dir, "BB"), region_input(&dir, "AA")])
            .expect("Should create suggester");
    assert_eq!(
        reversed.repository().by_id("42").map(|r| r.name.as_str()),
        Some("boston")
    );
}

#[test]
fn test_per_page_zero_is_rejected() {
    setup_test_env();

    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])
        .expect("Should stage dataset");
    let suggester = PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
        .expect("Should create suggester");

    let request = SuggestRequest::builder("tor").per_page(0).build();
    let error = suggester
        .suggest(&request, &["CA"])
        .expect_err("per_page 0 should be rejected");

    assert!(
        matches!(
            error,
            OrteliusError::Search(SearchError::InvalidPerPage(0))
        ),
        "Unexpected error: {error:?}"
    );
    assert!(error.to_string().contains("per_page must be at least 1"));
}

#[test]
fn test_edge_cases_do_not_panic() {
    setup_test_env();

    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])
        .expect("Should stage dataset");
    let suggester = PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
        .expect("Should create suggester");

    let long_query = "a".repeat(1000);
    let requests = [
        SuggestRequest::new(""),
        SuggestRequest::new("   "),
        SuggestRequest::new(long_query),
        SuggestRequest::builder("tor").page(usize::MAX / 2).build(),
        SuggestRequest::builder("tor").near(89.9, 179.9).build(),
    ];

    for request in &requests {
        let result = suggester.suggest(request, &["CA"]);
        assert!(result.is_ok(), "Suggest should not error for {request:?}");
    }

    // Unknown regions are empty, not an error.
    let page = suggester
        .suggest(&SuggestRequest::new("tor"), &["ZZ"])
        .expect("Unknown region should not error");
    assert!(page.suggestions.is_empty());
    assert_eq!(page.total_pages, 0);

    let page = suggester
        .suggest(&SuggestRequest::new("tor"), &[])
        .expect("No regions should not error");
    assert!(page.suggestions.is_empty());
}

#[test]
fn test_zip_and_directory_sources_agree() {
    setup_test_env();

    let archive = test_data::zip_dataset("CA", &test_data::canada_rows())
        .expect("Should stage zip dataset");
    let from_zip = PlaceSuggester::from_inputs(vec![(
        "CA".to_owned(),
        DatasetInput::from_path(archive.path()).expect("Archive input should open"),
    )])
    .expect("Should create suggester from zip");

    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])
        .expect("Should stage directory dataset");
    let from_dir = PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
        .expect("Should create suggester from directory");

    let request = SuggestRequest::new("Tor");
    let zip_page = from_zip.suggest(&request, &["CA"]).expect("Suggest should work");
    let dir_page = from_dir.suggest(&request, &["CA"]).expect("Suggest should work");

    assert_eq!(zip_page, dir_page, "Both layouts should index identically");
    assert_eq!(zip_page.suggestions[0].name, "Toronto");
}

#[test]
fn test_nested_archive_entries_are_found() {
    setup_test_env();

    // Dumps that nest their region file under a directory still resolve,
    // since entry names are curated past the first separator.
    let archive = test_data::nested_zip_dataset("CA", &test_data::canada_rows())
        .expect("Should stage nested zip dataset");
    let suggester = PlaceSuggester::from_inputs(vec![(
        "CA".to_owned(),
        DatasetInput::from_path(archive.path()).expect("Archive input should open"),
    )])
    .expect("Should create suggester from nested zip");

    assert_eq!(suggester.repository().len(), test_data::canada_rows().len());
}

#[test]
fn test_missing_region_file_is_fatal() {
    setup_test_env();

    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])
        .expect("Should stage dataset");

    let error = PlaceSuggester::from_inputs(vec![region_input(&dir, "GB")])
        .expect_err("A region without its file should fail construction");
    assert!(
        error.to_string().contains("GB.txt"),
        "Error should name the missing file: {error}"
    );
}

#[test]
fn test_concurrent_access() {
    setup_test_env();

    use std::sync::Arc;
    use std::thread;

    let dir = test_data::directory_dataset(&[("CA", test_data::canada_rows())])
        .expect("Should stage dataset");
    let suggester = Arc::new(
        PlaceSuggester::from_inputs(vec![region_input(&dir, "CA")])
            .expect("Should create suggester"),
    );

    let handles: Vec<_> = (0..3)
        .map(|i| {
            let suggester = Arc::clone(&suggester);
            thread::spawn(move || {
                let query = match i {
                    0 => "Tor",
                    1 => "Mon",
                    _ => "Van",
                };
                let page = suggester
                    .suggest(&SuggestRequest::new(query), &["CA"])
                    .expect("Concurrent suggest should work");
                assert!(!page.suggestions.is_empty(), "Query {query} should match");
                page
            })
        })
        .collect();

    let all_pages: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread should complete"))
        .collect();
    assert_eq!(all_pages.len(), 3, "Should have results from all threads");
}
