use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use uuid::Uuid;

use tournament_backend::league::{FixtureGenerator, LeagueError};
use tournament_backend::models::fixture::*;

mod common;
use common::fixture_helpers::{assert_consecutive_rounds, assert_no_team_twice_per_round, pairs, roster};

fn with_return_leg(policy: ReturnLegPolicy) -> GenerationOptions {
    GenerationOptions {
        return_leg: true,
        return_leg_policy: policy,
        ..GenerationOptions::default()
    }
}

#[test]
fn test_first_leg_pairs_every_team_once() {
    let generator = FixtureGenerator::default();

    for team_count in 2..=12 {
        let roster = roster(team_count);
        let fixtures = generator.first_leg(&roster);

        assert_eq!(fixtures.len(), team_count * (team_count - 1) / 2);
        assert_eq!(pairs(&fixtures).len(), fixtures.len(), "pair repeated for {} teams", team_count);
        assert!(fixtures.iter().all(|f| f.team_x != f.team_y));
        assert!(fixtures.iter().all(|f| f.leg == Leg::First && f.home_team_id == f.team_x));
    }
}

#[test]
fn test_four_teams_single_leg() {
    let generator = FixtureGenerator::default();
    let roster = roster(4);
    let (a, b, c, d) = (roster.team_ids[0], roster.team_ids[1], roster.team_ids[2], roster.team_ids[3]);

    let outcome = generator.generate(&[roster.clone()], &GenerationOptions::default()).unwrap();

    let expected: HashSet<TeamPair> = [(a, b), (a, c), (a, d), (b, c), (b, d), (c, d)]
        .into_iter()
        .map(|(x, y)| TeamPair::new(x, y))
        .collect();
    assert_eq!(pairs(&outcome.fixtures), expected);

    assert_no_team_twice_per_round(&outcome.fixtures);
    assert_eq!(assert_consecutive_rounds(&outcome.fixtures, 1), 3);
    for round in 1..=3 {
        assert_eq!(outcome.fixtures.iter().filter(|f| f.round == round).count(), 2);
    }

    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.groups[0].fixture_count, 6);
    assert_eq!(outcome.groups[0].round_count, 3);
}

#[test]
fn test_three_teams_one_fixture_per_round() {
    let generator = FixtureGenerator::default();
    let outcome = generator.generate(&[roster(3)], &GenerationOptions::default()).unwrap();

    assert_eq!(outcome.fixtures.len(), 3);
    assert_eq!(assert_consecutive_rounds(&outcome.fixtures, 1), 3);
    for round in 1..=3 {
        assert_eq!(outcome.fixtures.iter().filter(|f| f.round == round).count(), 1);
    }
}

#[test]
fn test_sequential_return_leg_reverses_first_leg() {
    let generator = FixtureGenerator::default();

    for team_count in 2..=8 {
        let outcome = generator
            .generate(&[roster(team_count)], &with_return_leg(ReturnLegPolicy::Sequential))
            .unwrap();

        let (first, second): (Vec<Fixture>, Vec<Fixture>) =
            outcome.fixtures.iter().cloned().partition(|f| f.leg == Leg::First);
        assert_eq!(first.len(), second.len());

        let first_oriented: HashSet<(Uuid, Uuid)> = first.iter().map(|f| (f.team_x, f.team_y)).collect();
        let second_oriented: HashSet<(Uuid, Uuid)> = second.iter().map(|f| (f.team_x, f.team_y)).collect();
        assert_eq!(second_oriented.len(), second.len(), "return fixture repeated");
        for fixture in &second {
            assert!(first_oriented.contains(&(fixture.team_y, fixture.team_x)));
            assert_eq!(fixture.home_team_id, fixture.team_x);
        }

        assert_no_team_twice_per_round(&outcome.fixtures);
        let last_first = assert_consecutive_rounds(&first, 1);
        assert_consecutive_rounds(&second, last_first + 1);
    }
}

#[test]
fn test_mirrored_return_leg_shifts_rounds() {
    let generator = FixtureGenerator::default();

    for team_count in 2..=8 {
        let outcome = generator
            .generate(&[roster(team_count)], &with_return_leg(ReturnLegPolicy::Mirrored))
            .unwrap();

        let first: Vec<&Fixture> = outcome.fixtures.iter().filter(|f| f.leg == Leg::First).collect();
        let second: Vec<&Fixture> = outcome.fixtures.iter().filter(|f| f.leg == Leg::Return).collect();
        let last_round = first.iter().map(|f| f.round).max().unwrap();

        assert_eq!(first.len(), second.len());
        for fixture in &first {
            let mirror = second
                .iter()
                .find(|r| r.team_x == fixture.team_y && r.team_y == fixture.team_x)
                .expect("missing mirrored fixture");
            assert_eq!(mirror.round, fixture.round + last_round);
        }
    }
}

#[test]
fn test_fixtures_sorted_by_leg_then_round() {
    let generator = FixtureGenerator::default();
    let outcome = generator
        .generate(&[roster(6)], &with_return_leg(ReturnLegPolicy::Sequential))
        .unwrap();

    let keys: Vec<(Leg, i32)> = outcome.fixtures.iter().map(|f| (f.leg, f.round)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_small_groups_are_skipped() {
    let generator = FixtureGenerator::default();
    let lonely = roster(1);
    let empty = roster(0);
    let full = roster(4);

    let outcome = generator
        .generate(&[lonely.clone(), full.clone(), empty.clone()], &GenerationOptions::default())
        .unwrap();

    assert_eq!(outcome.skipped_groups, vec![lonely.group_id, empty.group_id]);
    assert_eq!(outcome.groups.len(), 1);
    assert!(outcome.fixtures.iter().all(|f| f.group_id == full.group_id));
}

#[test]
fn test_no_fixtures_generated_error() {
    let generator = FixtureGenerator::default();
    let result = generator.generate(&[roster(1), roster(0)], &GenerationOptions::default());
    assert!(matches!(result, Err(LeagueError::NoFixturesGenerated)));

    let result = generator.generate(&[], &GenerationOptions::default());
    assert!(matches!(result, Err(LeagueError::NoFixturesGenerated)));
}

#[test]
fn test_group_selected_twice_is_rejected() {
    let generator = FixtureGenerator::default();
    let roster = roster(4);
    let result = generator.generate(&[roster.clone(), roster], &GenerationOptions::default());
    assert!(matches!(result, Err(LeagueError::Validation(_))));
}

#[test]
fn test_groups_are_generated_independently() {
    let generator = FixtureGenerator::default();
    let first = roster(4);
    let second = roster(3);

    let outcome = generator
        .generate(&[first.clone(), second.clone()], &GenerationOptions::default())
        .unwrap();

    assert_eq!(outcome.fixtures.len(), 6 + 3);
    for roster in [&first, &second] {
        let group: Vec<Fixture> = outcome
            .fixtures
            .iter()
            .filter(|f| f.group_id == roster.group_id)
            .cloned()
            .collect();
        assert!(group.iter().all(|f| roster.team_ids.contains(&f.team_x) && roster.team_ids.contains(&f.team_y)));
        assert_consecutive_rounds(&group, 1);
    }
}

#[test]
fn test_shuffle_keeps_pairs() {
    let generator = FixtureGenerator::default();
    let roster = roster(6);
    let options = GenerationOptions {
        shuffle_teams: true,
        ..GenerationOptions::default()
    };

    let mut rng = StdRng::seed_from_u64(42);
    let shuffled = generator.generate_with_rng(&[roster.clone()], &options, &mut rng).unwrap();
    let plain = generator.generate(&[roster], &GenerationOptions::default()).unwrap();

    assert_eq!(pairs(&shuffled.fixtures), pairs(&plain.fixtures));
    assert_no_team_twice_per_round(&shuffled.fixtures);
}

#[test]
fn test_same_seed_same_schedule() {
    let generator = FixtureGenerator::default();
    let roster = roster(8);
    let options = GenerationOptions {
        shuffle_teams: true,
        return_leg: true,
        ..GenerationOptions::default()
    };

    let first = generator
        .generate_with_rng(&[roster.clone()], &options, &mut StdRng::seed_from_u64(7))
        .unwrap();
    let second = generator
        .generate_with_rng(&[roster], &options, &mut StdRng::seed_from_u64(7))
        .unwrap();

    assert_eq!(first.fixtures, second.fixtures);
}

#[test]
fn test_schedule_dates_rounds() {
    let generator = FixtureGenerator::default();
    let first_round_date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
    let kickoff = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
    let options = GenerationOptions {
        schedule: Some(ScheduleOptions {
            first_round_date,
            days_between_rounds: 7,
            kickoff_time: Some(kickoff),
        }),
        ..GenerationOptions::default()
    };

    let outcome = generator.generate(&[roster(4)], &options).unwrap();

    for fixture in &outcome.fixtures {
        let expected = first_round_date + chrono::Duration::days(7 * (fixture.round as i64 - 1));
        assert_eq!(fixture.date, Some(expected));
        assert_eq!(fixture.time, Some(kickoff));
    }
}

#[test]
fn test_invalid_schedule_interval_rejected() {
    let generator = FixtureGenerator::default();
    let options = GenerationOptions {
        schedule: Some(ScheduleOptions {
            first_round_date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            days_between_rounds: 0,
            kickoff_time: None,
        }),
        ..GenerationOptions::default()
    };

    let result = generator.generate(&[roster(4)], &options);
    assert!(matches!(result, Err(LeagueError::Validation(_))));
}

#[test]
fn test_circle_strategy_reaches_minimum_rounds() {
    let generator = FixtureGenerator::new(RoundStrategy::Circle);

    for team_count in 2..=10 {
        let outcome = generator.generate(&[roster(team_count)], &GenerationOptions::default()).unwrap();
        assert_no_team_twice_per_round(&outcome.fixtures);
        let last = assert_consecutive_rounds(&outcome.fixtures, 1);
        assert_eq!(last, generator.calculate_minimum_rounds_per_leg(team_count));
    }
}

#[test]
fn test_request_strategy_overrides_default() {
    let generator = FixtureGenerator::new(RoundStrategy::Greedy);
    let options = GenerationOptions {
        round_strategy: Some(RoundStrategy::Circle),
        ..GenerationOptions::default()
    };

    let outcome = generator.generate(&[roster(6)], &options).unwrap();
    assert_eq!(outcome.groups[0].round_count, 5);
}

#[test]
fn test_generate_request_deserializes_flattened_options() {
    let group_id = Uuid::new_v4();
    let body = serde_json::json!({
        "group_ids": [group_id],
        "return_leg": true,
        "return_leg_policy": "mirrored",
        "schedule": { "first_round_date": "2026-03-07" }
    });

    let request: GenerateFixturesRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.group_ids, vec![group_id]);
    assert!(request.options.return_leg);
    assert_eq!(request.options.return_leg_policy, ReturnLegPolicy::Mirrored);
    assert_eq!(request.options.round_strategy, None);
    assert_eq!(request.options.schedule.unwrap().days_between_rounds, 7);
}
