//! Core types for string bucketing.
//!
//! This module defines the data structures that flow from extraction
//! through classification to the report.

use serde::Serialize;

/// A printable run found in the input, with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ExtractedString {
    /// Byte offset of the first character of the run
    #[serde(rename = "offset")]
    pub data_offset: u64,
    /// The decoded run (printable ASCII only)
    pub value: String,
}

impl ExtractedString {
    pub fn new(data_offset: u64, value: impl Into<String>) -> Self {
        Self {
            data_offset,
            value: value.into(),
        }
    }
}

/// Human-interest category a string can be routed to.
///
/// Variants are declared in display order; see [`Bucket::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// URLs and endpoints
    Urls,
    /// UI strings and in-game messages
    GameText,
    /// Asset and prefab names
    Assets,
    /// Audio file names and sound vocabulary
    Music,
    /// Gameplay tuning values
    Config,
    /// Build, author and version metadata
    Developer,
    /// Facebook / Twitter integration
    Social,
    /// Leaderboard, hashing and network calls, plus known game classes
    NetworkOrMisc,
}

impl Bucket {
    /// All buckets in report order.
    pub const ALL: [Bucket; 8] = [
        Bucket::Urls,
        Bucket::GameText,
        Bucket::Assets,
        Bucket::Music,
        Bucket::Config,
        Bucket::Developer,
        Bucket::Social,
        Bucket::NetworkOrMisc,
    ];

    /// Section title used in the text report.
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Urls => "URLS & ENDPOINTS",
            Bucket::GameText => "GAME TEXT & UI STRINGS",
            Bucket::Assets => "ASSET/PREFAB NAMES",
            Bucket::Music => "MUSIC/SOUND REFERENCES",
            Bucket::Config => "GAME CONFIG & LOGIC",
            Bucket::Developer => "DEVELOPER/BUILD INFO",
            Bucket::Social => "FACEBOOK/SOCIAL",
            Bucket::NetworkOrMisc => "LEADERBOARD/HASH/NETWORK",
        }
    }

    /// Get short display name for the bucket
    pub fn short_name(&self) -> &'static str {
        match self {
            Bucket::Urls => "urls",
            Bucket::GameText => "game_text",
            Bucket::Assets => "assets",
            Bucket::Music => "music",
            Bucket::Config => "config",
            Bucket::Developer => "developer",
            Bucket::Social => "social",
            Bucket::NetworkOrMisc => "network_or_misc",
        }
    }

    /// Position in [`Bucket::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Outcome of classifying one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Engine or framework internal; never reported
    Skipped,
    /// No bucket keyword matched; never reported
    Unmatched,
    /// Routed to a bucket
    Bucket(Bucket),
}

impl Classification {
    /// The bucket, if the string was routed to one.
    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            Classification::Bucket(b) => Some(*b),
            _ => None,
        }
    }
}
