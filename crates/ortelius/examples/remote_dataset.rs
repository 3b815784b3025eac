//! Building straight from the GeoNames dump
//!
//! This example downloads per-region dump archives from
//! download.geonames.org and builds the suggester from them. The download
//! only happens when `ORTELIUS_REMOTE=1` is set, so the example stays
//! runnable offline.

use ortelius::{PlaceSuggester, SuggestRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("ORTELIUS_REMOTE").is_err() {
        println!("Set ORTELIUS_REMOTE=1 to download from download.geonames.org");
        return Ok(());
    }

    ortelius::init_logging(tracing::Level::INFO)?;

    // AD and SM are two of the smallest dumps, a few kilobytes each.
    let suggester = PlaceSuggester::from_geonames_regions(&["AD", "SM"])?;
    println!("Indexed {} places", suggester.repository().len());

    let request = SuggestRequest::builder("San").per_page(5).build();
    let page = suggester.suggest(&request, &["AD", "SM"])?;
    println!("Top matches for 'San':");
    for suggestion in &page.suggestions {
        println!("  {} ({:.3})", suggestion.name, suggestion.score);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = ortelius::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_remote_dataset_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Remote dataset example should run successfully"
        );
    }
}
