use tracing::warn;

use super::club_points::score_clubs;
use super::rank::assign_ranks;
use crate::error::PipelineError;
use crate::model::{COURSE, CanonicalStation, ClubScore, Snapshot, SnapshotDiagnostics};
use crate::processing::club::ClubNormalizer;
use crate::processing::team::normalize_record;
use crate::view::{OverallRow, StationRow, TeamRow, overall_performance, station_table, team_table};

/// Lookup tables the pipeline runs against. Both are versioned configuration,
/// passed in explicitly so tests can swap in alternates.
pub struct PipelineConfig {
    pub clubs: ClubNormalizer,
    pub layout: Vec<CanonicalStation>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            clubs: ClubNormalizer::default(),
            layout: COURSE.to_vec(),
        }
    }
}

/// Everything presentation consumes, derived from one snapshot.
#[derive(Debug)]
pub struct ResultTables {
    pub team_rows: Vec<TeamRow>,
    pub station_rows: Vec<StationRow>,
    pub club_rows: Vec<ClubScore>,
    pub overall: Vec<OverallRow>,
    pub diagnostics: SnapshotDiagnostics,
}

/// Runs the whole pipeline over one snapshot: normalize every record, assign
/// per-category ranks, score clubs, build the output tables. A bad record
/// degrades to sentinel fields; the batch itself never partially fails.
pub fn process_snapshot(
    snapshot: &Snapshot,
    config: &PipelineConfig,
) -> Result<ResultTables, PipelineError> {
    let mut diagnostics = SnapshotDiagnostics::default();

    let normalized: Vec<_> = snapshot
        .records
        .iter()
        .map(|raw| normalize_record(raw, &config.clubs, &config.layout, &mut diagnostics))
        .collect();

    let ranked = assign_ranks(normalized);
    let club_rows = score_clubs(&ranked)?;

    if !diagnostics.unmapped_clubs.is_empty() {
        warn!(
            distinct = diagnostics.unmapped_clubs.len(),
            "club spellings missing from the normalization table"
        );
    }

    Ok(ResultTables {
        team_rows: team_table(&ranked),
        station_rows: station_table(&ranked),
        club_rows,
        overall: overall_performance(&snapshot.records),
        diagnostics,
    })
}
