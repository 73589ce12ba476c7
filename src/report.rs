//! Bucketed report over classified strings.

use crate::classifier::classify;
use crate::types::{Bucket, Classification, ExtractedString};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

/// Characters of a string shown per line in the text report.
pub const MAX_DISPLAY_WIDTH: usize = 150;

/// Width of the `=` rules around section titles.
const RULE_WIDTH: usize = 60;

/// Strings routed into buckets, in extraction order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    total_strings: usize,
    buckets: [Vec<ExtractedString>; 8],
    skipped: usize,
    unmatched: usize,
}

impl Report {
    /// Classify every string and route it to its bucket.
    pub fn build(strings: Vec<ExtractedString>) -> Self {
        let mut report = Report {
            total_strings: strings.len(),
            ..Default::default()
        };

        for s in strings {
            match classify(&s.value) {
                Classification::Bucket(bucket) => report.buckets[bucket.index()].push(s),
                Classification::Skipped => report.skipped += 1,
                Classification::Unmatched => report.unmatched += 1,
            }
        }

        tracing::debug!(
            "report: {} strings, {} skipped, {} unmatched",
            report.total_strings,
            report.skipped,
            report.unmatched
        );

        report
    }

    /// Number of strings extracted, before classification.
    pub fn total_strings(&self) -> usize {
        self.total_strings
    }

    /// Strings dropped by the skip-list.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Strings that matched no bucket.
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }

    /// All members of a bucket, duplicates included.
    pub fn bucket(&self, bucket: Bucket) -> &[ExtractedString] {
        &self.buckets[bucket.index()]
    }

    /// Members of a bucket with repeated values removed, keeping the first
    /// occurrence (and so the lowest offset).
    pub fn unique_entries(&self, bucket: Bucket) -> Vec<&ExtractedString> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.bucket(bucket)
            .iter()
            .filter(|s| seen.insert(s.value.as_str()))
            .collect()
    }

    /// Non-empty buckets in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = Bucket> + '_ {
        Bucket::ALL
            .into_iter()
            .filter(|b| !self.bucket(*b).is_empty())
    }

    /// Write the plain-text report.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total strings found: {}", self.total_strings)?;
        writeln!(out)?;

        let rule = "=".repeat(RULE_WIDTH);
        for bucket in self.non_empty() {
            writeln!(out, "{}", rule)?;
            writeln!(
                out,
                "  {} ({} found)",
                bucket.title(),
                self.bucket(bucket).len()
            )?;
            writeln!(out, "{}", rule)?;
            for s in self.unique_entries(bucket) {
                writeln!(
                    out,
                    "  [{:>10}] {}",
                    s.data_offset,
                    truncate(&s.value, MAX_DISPLAY_WIDTH)
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /// Structured form of the report for `--json`.
    pub fn to_json(&self) -> JsonReport<'_> {
        JsonReport {
            total_strings: self.total_strings,
            skipped: self.skipped,
            unmatched: self.unmatched,
            buckets: self
                .non_empty()
                .map(|bucket| JsonBucket {
                    bucket,
                    title: bucket.title(),
                    found: self.bucket(bucket).len(),
                    entries: self.unique_entries(bucket),
                })
                .collect(),
        }
    }
}

/// Serializable view of a [`Report`]. Entries are deduplicated but not
/// truncated.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub total_strings: usize,
    pub skipped: usize,
    pub unmatched: usize,
    pub buckets: Vec<JsonBucket<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonBucket<'a> {
    pub bucket: Bucket,
    pub title: &'static str,
    pub found: usize,
    pub entries: Vec<&'a ExtractedString>,
}

/// Cut a string to at most `max` characters.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
