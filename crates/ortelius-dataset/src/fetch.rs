//! Streaming downloads of remote dataset archives.
//!
//! A blocking facade over an internal tokio runtime, so callers build their
//! repositories synchronously at startup. Each archive streams into a
//! temporary file with a progress bar; nothing here retries, a failed
//! download is a fatal startup error for the caller.

use futures::{StreamExt, future::try_join_all};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::error::Result;

/// Download one archive to a temporary file, blocking until complete.
#[instrument(name = "Fetch archive", skip_all, level = "info")]
pub fn fetch_archive(url: &str) -> Result<NamedTempFile> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let client = Client::new();
        download_to_temp_file(&client, url).await
    })
}

/// Download several archives concurrently, blocking until all complete.
///
/// Results come back in the order of `urls`, not in completion order.
#[instrument(name = "Fetch archives", skip_all, level = "info")]
pub fn fetch_archives(urls: &[impl AsRef<str>]) -> Result<Vec<NamedTempFile>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let client = Client::new();
        try_join_all(
            urls.iter()
                .map(|url| download_to_temp_file(&client, url.as_ref())),
        )
        .await
    })
}

async fn download_to_temp_file(client: &Client, url: &str) -> Result<NamedTempFile> {
    info!(url, "Starting download");
    let response = client.get(url).send().await?.error_for_status()?;

    let pb = progress_bar(response.content_length().unwrap_or(0), url);

    let temp_file = NamedTempFile::new()?;
    let mut dest_file = tokio::fs::File::create(temp_file.path()).await?;

    let mut stream = response.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = item?;
        dest_file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    dest_file.flush().await?;
    pb.finish_and_clear();

    info!(url, path = ?temp_file.path(), "Download complete");
    Ok(temp_file)
}

fn progress_bar(total_size: u64, url: &str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{msg} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::new(total_size);
    pb.set_style(style);
    pb.set_message(format!(
        "Downloading {}",
        url.rsplit('/').next().unwrap_or(url)
    ));
    pb
}
