use ahash::RandomState;
use std::collections::HashMap;

use crate::model::NormalizedTeamRecord;

/// Partitions records by category, keeping categories in first-appearance
/// order and records in input order within each category.
#[must_use]
pub fn group_by_category(
    records: Vec<NormalizedTeamRecord>,
) -> Vec<(String, Vec<NormalizedTeamRecord>)> {
    let mut grouped: HashMap<String, Vec<NormalizedTeamRecord>, RandomState> = HashMap::default();
    let mut category_order: Vec<String> = Vec::new();

    for record in records {
        if !grouped.contains_key(&record.category) {
            category_order.push(record.category.clone());
        }
        grouped
            .entry(record.category.clone())
            .or_default()
            .push(record);
    }

    category_order
        .into_iter()
        .map(|category| {
            let teams = grouped.remove(&category).unwrap_or_default();
            (category, teams)
        })
        .collect()
}
