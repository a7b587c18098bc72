//! One-shot HTTP download of the raw extract
//!
//! A single GET with a timeout; no retry. The body streams into a `.part`
//! file that is renamed over the destination only after a complete read.

use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Download `url` into `destination`, returning the number of bytes written
pub fn download_to(url: &str, destination: &Path, timeout: Duration, show_progress: bool) -> Result<u64> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create cache directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::download(url, "Failed to build HTTP client", Some(e)))?;

    info!("Downloading dataset from {}", url);
    let response = client
        .get(url)
        .header(USER_AGENT, concat!("trade-atlas/", env!("CARGO_PKG_VERSION")))
        .send()
        .map_err(|e| Error::download(url, "Request failed", Some(e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::download(
            url,
            format!("Server responded with HTTP {}", status),
            None,
        ));
    }

    let progress = create_download_bar(response.content_length(), show_progress);
    let partial = destination.with_extension("part");
    let file = File::create(&partial)
        .map_err(|e| Error::io(format!("Failed to create '{}'", partial.display()), e))?;
    let mut writer = BufWriter::new(file);

    let mut reader = progress.wrap_read(response);
    let copied = io::copy(&mut reader, &mut writer);
    let bytes = match copied.and_then(|bytes| writer.flush().map(|_| bytes)) {
        Ok(bytes) => bytes,
        Err(e) => {
            progress.abandon_with_message("download failed");
            let _ = fs::remove_file(&partial);
            return Err(Error::download(url, format!("Failed to read body: {}", e), None));
        }
    };
    drop(writer);

    fs::rename(&partial, destination).map_err(|e| {
        Error::io(
            format!("Failed to move download into '{}'", destination.display()),
            e,
        )
    })?;

    progress.finish_with_message("downloaded");
    debug!("Wrote {} bytes to {}", bytes, destination.display());
    Ok(bytes)
}

/// Byte-count bar when the length is known, spinner otherwise
fn create_download_bar(content_length: Option<u64>, visible: bool) -> ProgressBar {
    let bar = match content_length {
        Some(total) => {
            let bar = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner:.green} {bytes} {msg}")
            {
                bar.set_style(style);
            }
            bar
        }
    };
    if !visible {
        bar.set_draw_target(ProgressDrawTarget::hidden());
    }
    bar.set_message("fetching dataset");
    bar
}
