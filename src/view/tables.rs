use serde::{Deserialize, Serialize};

use crate::model::{NormalizedTeamRecord, RawTeamRecord};
use crate::processing::clock::{format_clock, parse_clock};

/// One row of the team table, ready for presentation.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamRow {
    pub rank: Option<u32>,
    pub bib: String,
    pub team: String,
    pub members: Vec<String>,
    pub clubs: Vec<String>,
    pub times: [String; 2],
    pub category: String,
}

/// One row per (team, canonical station). `seconds` is `None` for stations
/// the team's raw row never reported or reported with an unparseable time, so
/// presentation can tell "no data" from a real zero-second split.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StationRow {
    pub team: String,
    pub station_order: usize,
    pub station: String,
    pub raw_time: Option<String>,
    pub seconds: Option<u32>,
}

/// Per-team mean of the two candidate time fields, formatted for display.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OverallRow {
    pub team: String,
    pub average_seconds: u32,
    pub total_time: String,
}

#[must_use]
pub fn team_table(records: &[NormalizedTeamRecord]) -> Vec<TeamRow> {
    records
        .iter()
        .map(|record| TeamRow {
            rank: record.rank,
            bib: record.bib.clone(),
            team: record.team.clone(),
            members: record.members.clone(),
            clubs: record.clubs.clone(),
            times: record.raw_times.clone(),
            category: record.category.clone(),
        })
        .collect()
}

#[must_use]
pub fn station_table(records: &[NormalizedTeamRecord]) -> Vec<StationRow> {
    let mut rows = Vec::new();
    for record in records {
        for (idx, split) in record.splits.iter().enumerate() {
            rows.push(StationRow {
                team: record.team.clone(),
                station_order: idx,
                station: split.station.label(),
                raw_time: split.outcome.raw_text().map(ToString::to_string),
                seconds: split.outcome.seconds(),
            });
        }
    }
    rows
}

/// Averages whichever of the two raw time fields parse. Teams where neither
/// field parses get no row.
#[must_use]
pub fn overall_performance(records: &[RawTeamRecord]) -> Vec<OverallRow> {
    records
        .iter()
        .filter_map(|record| {
            let parsed: Vec<u32> = record
                .times
                .iter()
                .filter_map(|t| parse_clock(t).ok())
                .collect();
            if parsed.is_empty() {
                return None;
            }
            let average = parsed.iter().map(|&s| u64::from(s)).sum::<u64>() / parsed.len() as u64;
            let average = u32::try_from(average).unwrap_or(u32::MAX);
            Some(OverallRow {
                team: record.team.clone(),
                average_seconds: average,
                total_time: format_clock(average),
            })
        })
        .collect()
}
