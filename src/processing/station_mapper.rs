use ahash::RandomState;
use std::collections::HashMap;

use super::clock::parse_clock;
use crate::model::{CanonicalStation, RUN_MARKER, RawSplit, SplitOutcome, StationSplit};

/// Numbers repeated running-segment labels by occurrence order, 1-based.
/// Occurrence is tracked per distinct label (running segments all count under
/// the marker key), but only the running segments actually get renamed; the
/// fixed stations appear once each in this course layout, so they pass
/// through untouched.
#[must_use]
pub fn disambiguate_labels(splits: &[RawSplit]) -> Vec<RawSplit> {
    let mut seen: HashMap<String, u32, RandomState> = HashMap::default();

    splits
        .iter()
        .map(|split| {
            let is_run = split.label.contains(RUN_MARKER);
            let key = if is_run { RUN_MARKER } else { split.label.as_str() };
            let count = seen.entry(key.to_string()).or_insert(0);
            *count += 1;

            let label = if is_run {
                format!("{RUN_MARKER} {count}")
            } else {
                split.label.clone()
            };
            RawSplit {
                label,
                time: split.time.clone(),
                order: split.order,
            }
        })
        .collect()
}

/// Aligns one team's raw splits against a course layout. Total function: every
/// layout slot gets an entry, with `Missing` where the team's row had nothing
/// for that station and `Unparseable` where it had a time that would not parse.
#[must_use]
pub fn align_splits(splits: &[RawSplit], layout: &[CanonicalStation]) -> Vec<StationSplit> {
    let mapped = disambiguate_labels(splits);
    let by_label: HashMap<String, &RawSplit, RandomState> =
        mapped.iter().map(|s| (s.label.clone(), s)).collect();

    layout
        .iter()
        .map(|station| {
            let outcome = match by_label.get(&station.label()) {
                Some(split) => match parse_clock(&split.time) {
                    Ok(seconds) => SplitOutcome::Recorded {
                        raw: split.time.clone(),
                        seconds,
                    },
                    Err(_) => SplitOutcome::Unparseable {
                        raw: split.time.clone(),
                    },
                },
                None => SplitOutcome::Missing,
            };
            StationSplit {
                station: *station,
                outcome,
            }
        })
        .collect()
}
