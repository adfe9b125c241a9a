use tracing::info;

use super::club::ClubNormalizer;
use super::clock::parse_clock;
use super::station_mapper::align_splits;
use crate::model::{
    CanonicalStation, NormalizedTeamRecord, RawTeamRecord, SnapshotDiagnostics, TotalTime,
};

/// Team-name fragment of the one row known to carry the wrong category.
const MISLABELED_TEAM_PATTERN: &str = "hreindýrabollan";

/// The single documented category correction: the matching team was published
/// under OPEN but raced PRO. Kept as a named rule so it stays visible and can
/// be retired once the upstream data is fixed.
#[must_use]
pub fn fix_wrong_category(team: &str, category: &str) -> Option<String> {
    if team.to_lowercase().contains(MISLABELED_TEAM_PATTERN) && category.contains("OPEN") {
        Some(category.replace("OPEN", "PRO"))
    } else {
        None
    }
}

/// Splits a raw affiliation string into its club entries. Teams occasionally
/// list two gyms; cardinality is preserved downstream, one score contribution
/// per entry.
#[must_use]
pub fn split_affiliation(raw: &str) -> Vec<String> {
    raw.split(['/', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Comparable total from the two raw time fields: the minimum when both parse
/// (the two fields come from different timing methods and the more favorable
/// one is authoritative), whichever parses when only one does, `Invalid` when
/// neither does.
#[must_use]
pub fn compute_total(times: &[String; 2]) -> TotalTime {
    match (parse_clock(&times[0]), parse_clock(&times[1])) {
        (Ok(a), Ok(b)) => TotalTime::Timed(a.min(b)),
        (Ok(a), Err(_)) => TotalTime::Timed(a),
        (Err(_), Ok(b)) => TotalTime::Timed(b),
        (Err(_), Err(_)) => TotalTime::Invalid,
    }
}

/// Normalizes one raw record. Never fails: malformed sub-fields degrade to
/// sentinels so one bad row cannot abort the batch. Data-quality findings go
/// into `diagnostics`.
#[must_use]
pub fn normalize_record(
    raw: &RawTeamRecord,
    clubs: &ClubNormalizer,
    layout: &[CanonicalStation],
    diagnostics: &mut SnapshotDiagnostics,
) -> NormalizedTeamRecord {
    let category = match fix_wrong_category(&raw.team, &raw.category) {
        Some(fixed) => {
            info!(team = %raw.team, from = %raw.category, to = %fixed, "applied category correction");
            diagnostics.category_corrections += 1;
            fixed
        }
        None => raw.category.clone(),
    };

    let mut normalized_clubs = Vec::new();
    for entry in split_affiliation(&raw.club) {
        if clubs.lookup(&entry).is_none() {
            *diagnostics.unmapped_clubs.entry(entry.clone()).or_insert(0) += 1;
        }
        normalized_clubs.push(clubs.normalize(&entry).to_string());
    }

    let total = compute_total(&raw.times);
    if total == TotalTime::Invalid {
        diagnostics.invalid_totals += 1;
    }

    NormalizedTeamRecord {
        team: raw.team.clone(),
        bib: raw.bib.clone(),
        members: raw.members.clone(),
        clubs: normalized_clubs,
        category,
        raw_times: raw.times.clone(),
        total,
        splits: align_splits(&raw.splits, layout),
        rank: None,
    }
}
