//! Printable-run extraction.
//!
//! Works like the traditional `strings` command over an opaque byte stream:
//! no format parsing, just maximal runs of printable ASCII.

use crate::types::ExtractedString;

/// Minimum run length worth reporting.
pub const MIN_STRING_LENGTH: usize = 6;

/// Space through tilde. DEL (0x7F) and control bytes, tab and newline
/// included, end a run.
#[inline]
fn is_printable(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

/// Extract every maximal printable run of at least `min_length` bytes,
/// in file order.
pub fn extract_printable_runs(data: &[u8], min_length: usize) -> Vec<ExtractedString> {
    let mut strings = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &b) in data.iter().enumerate() {
        if is_printable(b) {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            push_run(data, start, i, min_length, &mut strings);
        }
    }

    // Handle run at end of data
    if let Some(start) = run_start {
        push_run(data, start, data.len(), min_length, &mut strings);
    }

    tracing::debug!(
        "extract_printable_runs: {} runs >= {} bytes in {} bytes of input",
        strings.len(),
        min_length,
        data.len()
    );

    strings
}

fn push_run(
    data: &[u8],
    start: usize,
    end: usize,
    min_length: usize,
    strings: &mut Vec<ExtractedString>,
) {
    let run = &data[start..end];
    if run.len() < min_length {
        return;
    }
    // Lossy decode never fails; every byte here is already ASCII.
    strings.push(ExtractedString {
        data_offset: start as u64,
        value: String::from_utf8_lossy(run).into_owned(),
    });
}
