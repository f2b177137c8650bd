use uuid::Uuid;

use tournament_backend::league::rounds::{distribute_rounds, max_fixtures_per_round};
use tournament_backend::league::FixtureGenerator;
use tournament_backend::models::fixture::{Fixture, GroupRoster, RoundStrategy};

mod common;
use common::fixture_helpers::{assert_consecutive_rounds, assert_no_team_twice_per_round, roster};

fn first_leg(roster: &GroupRoster) -> Vec<Fixture> {
    FixtureGenerator::default().first_leg(roster)
}

#[test]
fn test_greedy_rounds_are_valid_for_any_group_size() {
    for team_count in 2..=10 {
        let roster = roster(team_count);
        let mut fixtures = first_leg(&roster);

        let last = distribute_rounds(&mut fixtures, team_count, 1, RoundStrategy::Greedy);

        assert_no_team_twice_per_round(&fixtures);
        assert_eq!(assert_consecutive_rounds(&fixtures, 1), last);
        for round in 1..=last {
            let in_round = fixtures.iter().filter(|f| f.round == round).count();
            assert!(in_round >= 1 && in_round <= max_fixtures_per_round(team_count));
        }
    }
}

#[test]
fn test_circle_rounds_are_valid_for_any_group_size() {
    for team_count in 2..=10 {
        let roster = roster(team_count);
        let mut fixtures = first_leg(&roster);

        let last = distribute_rounds(&mut fixtures, team_count, 1, RoundStrategy::Circle);

        assert_no_team_twice_per_round(&fixtures);
        assert_eq!(assert_consecutive_rounds(&fixtures, 1), last);
        let expected = if team_count % 2 == 0 { team_count - 1 } else { team_count };
        assert_eq!(last, expected as i32, "{} teams", team_count);
    }
}

#[test]
fn test_distribution_starts_at_given_round() {
    for strategy in [RoundStrategy::Greedy, RoundStrategy::Circle] {
        let roster = roster(5);
        let mut fixtures = first_leg(&roster);

        let last = distribute_rounds(&mut fixtures, 5, 6, strategy);

        assert_eq!(fixtures.iter().map(|f| f.round).min(), Some(6));
        assert_eq!(assert_consecutive_rounds(&fixtures, 6), last);
    }
}

#[test]
fn test_circle_falls_back_on_repeated_pairs() {
    let roster = roster(4);
    let mut fixtures = first_leg(&roster);
    let extra: Vec<Fixture> = fixtures.iter().take(2).map(Fixture::reversed).collect();
    fixtures.extend(extra);

    let last = distribute_rounds(&mut fixtures, 4, 1, RoundStrategy::Circle);

    assert_no_team_twice_per_round(&fixtures);
    assert_eq!(assert_consecutive_rounds(&fixtures, 1), last);
}

#[test]
fn test_partial_fixture_set_is_compacted() {
    // Only the fixtures involving the first team
    let teams: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
    let roster = GroupRoster::new(Uuid::new_v4(), teams.clone());
    let mut fixtures: Vec<Fixture> = first_leg(&roster)
        .into_iter()
        .filter(|f| f.involves(teams[0]))
        .collect();

    let last = distribute_rounds(&mut fixtures, 6, 1, RoundStrategy::Circle);

    assert_eq!(last, 5);
    assert_consecutive_rounds(&fixtures, 1);
}

#[test]
fn test_single_fixture_set() {
    let roster = roster(2);
    let mut fixtures = first_leg(&roster);

    for strategy in [RoundStrategy::Greedy, RoundStrategy::Circle] {
        let last = distribute_rounds(&mut fixtures, 2, 1, strategy);
        assert_eq!(last, 1);
        assert_eq!(fixtures[0].round, 1);
    }
}
