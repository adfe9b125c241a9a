use ahash::RandomState;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::PipelineError;
use crate::model::{ClubScore, NormalizedTeamRecord};

/// Accumulates reciprocal-rank points per club. Every (record, club) pair
/// contributes `1 / rank`; a team listing two clubs contributes to both.
/// Rank must already be assigned on every record; an unranked record is a
/// pipeline precondition violation and rejects the whole call before any
/// points are accumulated.
pub fn score_clubs(records: &[NormalizedTeamRecord]) -> Result<Vec<ClubScore>, PipelineError> {
    for record in records {
        // Reciprocal-rank division needs rank >= 1.
        if record.rank.is_none() || record.rank == Some(0) {
            return Err(PipelineError::UnrankedRecord {
                team: record.team.clone(),
            });
        }
    }

    let mut totals: HashMap<String, (f64, usize), RandomState> = HashMap::default();
    for record in records {
        let rank = record.rank.unwrap_or(1); // checked above
        let points = 1.0 / f64::from(rank);
        for club in &record.clubs {
            let entry = totals.entry(club.clone()).or_insert((0.0, 0));
            entry.0 += points;
            entry.1 += 1;
        }
    }

    let mut scores: Vec<ClubScore> = totals
        .into_iter()
        .map(|(club, (total_points, team_count))| ClubScore {
            club,
            total_points,
            team_count,
            average_points: total_points / team_count as f64,
        })
        .collect();

    scores.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.average_points
                    .partial_cmp(&a.average_points)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.club.cmp(&b.club))
    });

    Ok(scores)
}
