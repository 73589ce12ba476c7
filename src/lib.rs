//! # assetstr - Bucketed string triage for binary game assets
//!
//! Scans a file as an opaque byte stream for printable ASCII runs (like
//! `strings(1)`), then sorts each run into a human-interest bucket using
//! keyword heuristics: URLs, UI text, asset names, audio, gameplay tuning,
//! build metadata, social integration and leaderboard/network calls.
//! Engine and framework internals are filtered out before bucketing.
//!
//! The pipeline is a single pass per stage:
//!
//! 1. [`extract_printable_runs`] finds runs of at least
//!    [`MIN_STRING_LENGTH`] bytes, with their byte offsets.
//! 2. [`classify`] routes each run to a [`Bucket`] (first keyword set wins)
//!    or drops it.
//! 3. [`Report`] dedups each bucket by value and renders it.
//!
//! ## Usage
//!
//! ```no_run
//! let report = assetstr::scan_file("slide.swf").unwrap();
//!
//! for bucket in report.non_empty() {
//!     for s in report.unique_entries(bucket) {
//!         println!("{} {}: {}", bucket, s.data_offset, s.value);
//!     }
//! }
//! ```

mod classifier;
mod error;
mod extraction;
mod report;
mod types;

pub use classifier::{classify, is_skipped};
pub use error::{Error, Result};
pub use extraction::{extract_printable_runs, MIN_STRING_LENGTH};
pub use report::{JsonBucket, JsonReport, Report, MAX_DISPLAY_WIDTH};
pub use types::{Bucket, Classification, ExtractedString};

use std::path::Path;

/// Extract and bucket strings from in-memory data.
pub fn scan(data: &[u8]) -> Report {
    Report::build(extract_printable_runs(data, MIN_STRING_LENGTH))
}

/// Read a file fully and bucket its strings.
///
/// The file handle is released before scanning starts.
pub fn scan_file(path: impl AsRef<Path>) -> Result<Report> {
    let data = read_input(path.as_ref())?;
    Ok(scan(&data))
}

/// Read the whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}
