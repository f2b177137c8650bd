use uuid::Uuid;

use tournament_backend::league::duplicates::{detect_duplicates, unverified_report};
use tournament_backend::league::FixtureGenerator;
use tournament_backend::models::fixture::{Fixture, Leg, TeamPair};

mod common;
use common::fixture_helpers::roster;

#[test]
fn test_counts_existing_pairs() {
    let fixtures = FixtureGenerator::default().first_leg(&roster(5));
    // Three of the ten pairs are already saved
    let existing: Vec<TeamPair> = fixtures.iter().take(3).map(Fixture::pair).collect();

    let report = detect_duplicates(&fixtures, existing);

    assert_eq!(report.total, 10);
    assert_eq!(report.existing, 3);
    assert_eq!(report.new, 7);
    assert_eq!(report.conflicting, vec![0, 1, 2]);
    assert!(report.has_conflicts());
}

#[test]
fn test_orientation_does_not_matter() {
    let group = Uuid::new_v4();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let candidates = vec![Fixture::new(group, a, b, Leg::First)];

    let report = detect_duplicates(&candidates, vec![TeamPair::new(b, a)]);

    assert_eq!(report.existing, 1);
    assert_eq!(report.new, 0);
}

#[test]
fn test_return_leg_matches_saved_first_leg() {
    let group = Uuid::new_v4();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let first = Fixture::new(group, a, b, Leg::First);
    let candidates = vec![first.clone(), first.reversed()];

    let report = detect_duplicates(&candidates, vec![first.pair()]);

    assert_eq!(report.existing, 2);
    assert_eq!(report.conflicting, vec![0, 1]);
}

#[test]
fn test_no_existing_matches() {
    let fixtures = FixtureGenerator::default().first_leg(&roster(4));

    let report = detect_duplicates(&fixtures, Vec::new());

    assert_eq!(report.existing, 0);
    assert_eq!(report.new, 6);
    assert!(!report.has_conflicts());
}

#[test]
fn test_unrelated_pairs_are_ignored() {
    let fixtures = FixtureGenerator::default().first_leg(&roster(3));
    let other = roster(2);

    let report = detect_duplicates(&fixtures, vec![TeamPair::new(other.team_ids[0], other.team_ids[1])]);

    assert_eq!(report.existing, 0);
    assert_eq!(report.new, 3);
}

#[test]
fn test_unverified_report_counts_everything_as_new() {
    let fixtures = FixtureGenerator::default().first_leg(&roster(4));

    let report = unverified_report(&fixtures);

    assert_eq!(report.total, 6);
    assert_eq!(report.new, 6);
    assert_eq!(report.existing, 0);
    assert!(report.conflicting.is_empty());
}
