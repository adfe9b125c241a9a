use super::sort_utils::group_by_category;
use crate::model::NormalizedTeamRecord;

/// Assigns 1-based ranks within each category: stable sort ascending by total
/// seconds, so equal totals keep their input order and invalid totals land at
/// the bottom. Records come back grouped by category, ranked order within
/// each.
#[must_use]
pub fn assign_ranks(records: Vec<NormalizedTeamRecord>) -> Vec<NormalizedTeamRecord> {
    let mut ranked = Vec::with_capacity(records.len());

    for (_category, mut teams) in group_by_category(records) {
        teams.sort_by_key(|team| team.total.sort_key());
        for (idx, team) in teams.iter_mut().enumerate() {
            team.rank = Some(idx as u32 + 1);
        }
        ranked.append(&mut teams);
    }

    ranked
}
