use rusty_hyrox::PipelineError;
use rusty_hyrox::model::{NormalizedTeamRecord, TotalTime};
use rusty_hyrox::score::club_points::score_clubs;
use rusty_hyrox::score::rank::assign_ranks;

const EPSILON: f64 = 1e-9;

fn record(team: &str, category: &str, total: TotalTime, clubs: &[&str]) -> NormalizedTeamRecord {
    NormalizedTeamRecord {
        team: team.to_string(),
        bib: String::new(),
        members: vec![],
        clubs: clubs.iter().map(ToString::to_string).collect(),
        category: category.to_string(),
        raw_times: [String::new(), String::new()],
        total,
        splits: vec![],
        rank: None,
    }
}

fn rank_of(records: &[NormalizedTeamRecord], team: &str) -> u32 {
    records
        .iter()
        .find(|r| r.team == team)
        .and_then(|r| r.rank)
        .unwrap()
}

#[test]
fn test_ranks_are_stable_on_ties() {
    // Input order A=3000, B=2500, C=2500; equal totals keep input order.
    let ranked = assign_ranks(vec![
        record("A", "PRO", TotalTime::Timed(3000), &[]),
        record("B", "PRO", TotalTime::Timed(2500), &[]),
        record("C", "PRO", TotalTime::Timed(2500), &[]),
    ]);
    assert_eq!(rank_of(&ranked, "A"), 3);
    assert_eq!(rank_of(&ranked, "B"), 1);
    assert_eq!(rank_of(&ranked, "C"), 2);
}

#[test]
fn test_invalid_totals_sort_last() {
    let ranked = assign_ranks(vec![
        record("A", "PRO", TotalTime::Invalid, &[]),
        record("B", "PRO", TotalTime::Timed(9999), &[]),
    ]);
    assert_eq!(rank_of(&ranked, "B"), 1);
    assert_eq!(rank_of(&ranked, "A"), 2);
}

#[test]
fn test_ranks_are_per_category() {
    let ranked = assign_ranks(vec![
        record("A", "PRO", TotalTime::Timed(4000), &[]),
        record("B", "OPEN", TotalTime::Timed(5000), &[]),
        record("C", "PRO", TotalTime::Timed(3000), &[]),
        record("D", "OPEN", TotalTime::Timed(4500), &[]),
    ]);
    assert_eq!(rank_of(&ranked, "C"), 1);
    assert_eq!(rank_of(&ranked, "A"), 2);
    assert_eq!(rank_of(&ranked, "D"), 1);
    assert_eq!(rank_of(&ranked, "B"), 2);
}

#[test]
fn test_reciprocal_rank_points() {
    // Club X has two teams ranked 1 and 4.
    let mut one = record("T1", "PRO", TotalTime::Timed(3000), &["X"]);
    one.rank = Some(1);
    let mut four = record("T4", "PRO", TotalTime::Timed(4000), &["X"]);
    four.rank = Some(4);

    let scores = score_clubs(&[one, four]).unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].club, "X");
    assert!((scores[0].total_points - 1.25).abs() < EPSILON);
    assert_eq!(scores[0].team_count, 2);
    assert!((scores[0].average_points - 0.625).abs() < EPSILON);
}

#[test]
fn test_multi_club_teams_contribute_to_each_club() {
    let mut rec = record("T", "PRO", TotalTime::Timed(3000), &["X", "Y"]);
    rec.rank = Some(2);

    let scores = score_clubs(&[rec]).unwrap();
    assert_eq!(scores.len(), 2);
    for score in &scores {
        assert!((score.total_points - 0.5).abs() < EPSILON);
        assert_eq!(score.team_count, 1);
    }
}

#[test]
fn test_scoreboard_sorted_by_points_then_average() {
    let mut a1 = record("A1", "PRO", TotalTime::Timed(1), &["A"]);
    a1.rank = Some(1);
    let mut b1 = record("B1", "PRO", TotalTime::Timed(2), &["B"]);
    b1.rank = Some(2);
    let mut b2 = record("B2", "PRO", TotalTime::Timed(3), &["B"]);
    b2.rank = Some(2);

    // A: total 1.0 from one team. B: total 1.0 from two teams, lower average.
    let scores = score_clubs(&[a1, b1, b2]).unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].club, "A");
    assert_eq!(scores[1].club, "B");
    assert!((scores[0].total_points - scores[1].total_points).abs() < EPSILON);
    assert!(scores[0].average_points > scores[1].average_points);
}

#[test]
fn test_unranked_record_rejects_scoring() {
    let ranked = record("OK", "PRO", TotalTime::Timed(3000), &["X"]);
    let mut ranked = ranked;
    ranked.rank = Some(1);
    let unranked = record("Straggler", "PRO", TotalTime::Timed(3500), &["X"]);

    let err = score_clubs(&[ranked, unranked]).unwrap_err();
    match err {
        PipelineError::UnrankedRecord { team } => assert_eq!(team, "Straggler"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_rank_rejects_scoring() {
    let mut rec = record("Zero", "PRO", TotalTime::Timed(3000), &["X"]);
    rec.rank = Some(0);
    assert!(matches!(
        score_clubs(&[rec]),
        Err(PipelineError::UnrankedRecord { .. })
    ));
}
