use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PipelineError;
use crate::model::station::CanonicalStation;

/// One `{label, time}` pair as scraped from a result row, in arrival order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RawSplit {
    pub label: String,
    pub time: String,
    #[serde(default)]
    pub order: Option<u32>,
}

/// A team's row exactly as the retrieval step produced it. Field names match
/// the scraper's JSON document. `times` is `[secondary, primary]`; either slot
/// may be empty.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RawTeamRecord {
    #[serde(rename = "BIB")]
    pub bib: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Members")]
    pub members: Vec<String>,
    #[serde(rename = "Club")]
    pub club: String,
    #[serde(rename = "Time")]
    pub times: [String; 2],
    #[serde(rename = "Splits")]
    pub splits: Vec<RawSplit>,
    #[serde(rename = "Category")]
    pub category: String,
}

/// One immutable capture of the full results document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub records: Vec<RawTeamRecord>,
    pub retrieved_at: NaiveDateTime,
}

impl Snapshot {
    /// Parses the scraper's JSON document (a bare array of team records).
    pub fn from_json_str(json: &str, retrieved_at: NaiveDateTime) -> Result<Self, PipelineError> {
        let records: Vec<RawTeamRecord> = serde_json::from_str(json)?;
        Ok(Self {
            records,
            retrieved_at,
        })
    }
}

/// Comparable total time for ranking. `Invalid` means neither raw time field
/// parsed; it sorts after every timed result.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalTime {
    Timed(u32),
    Invalid,
}

impl TotalTime {
    #[must_use]
    pub fn seconds(&self) -> Option<u32> {
        match self {
            Self::Timed(s) => Some(*s),
            Self::Invalid => None,
        }
    }

    /// Ascending sort key; invalid totals sort last.
    #[must_use]
    pub fn sort_key(&self) -> u64 {
        match self {
            Self::Timed(s) => u64::from(*s),
            Self::Invalid => u64::MAX,
        }
    }
}

/// What the raw row said about one canonical station. `Recorded { seconds: 0 }`
/// is a genuine zero-second split; `Missing` means the row never mentioned the
/// station at all.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum SplitOutcome {
    Recorded { raw: String, seconds: u32 },
    Unparseable { raw: String },
    Missing,
}

impl SplitOutcome {
    #[must_use]
    pub fn seconds(&self) -> Option<u32> {
        match self {
            Self::Recorded { seconds, .. } => Some(*seconds),
            _ => None,
        }
    }

    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::Recorded { raw, .. } | Self::Unparseable { raw } => Some(raw),
            Self::Missing => None,
        }
    }
}

/// One slot of a team's canonical station vector.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StationSplit {
    pub station: CanonicalStation,
    pub outcome: SplitOutcome,
}

/// A team record after normalization. Immutable once built, except for `rank`,
/// which the ranking pass sets exactly once per category.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NormalizedTeamRecord {
    pub team: String,
    pub bib: String,
    pub members: Vec<String>,
    /// One normalized entry per raw affiliation entry; never deduplicated.
    pub clubs: Vec<String>,
    pub category: String,
    /// The two raw time strings, kept for display.
    pub raw_times: [String; 2],
    pub total: TotalTime,
    /// Always `COURSE.len()` entries in canonical order.
    pub splits: Vec<StationSplit>,
    pub rank: Option<u32>,
}

/// Club standing derived from one snapshot. Recomputed fresh on every run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClubScore {
    pub club: String,
    pub total_points: f64,
    pub team_count: usize,
    pub average_points: f64,
}

/// Data-quality counters gathered while normalizing one snapshot. The unmapped
/// club counts exist so the normalization table can be grown as new free-text
/// spellings show up, instead of letting the scoreboard fragment silently.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SnapshotDiagnostics {
    pub unmapped_clubs: BTreeMap<String, usize>,
    pub invalid_totals: usize,
    pub category_corrections: usize,
}
