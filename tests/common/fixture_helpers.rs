use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

use tournament_backend::models::fixture::{Fixture, GroupRoster, Leg, TeamPair};
use tournament_backend::models::game::Match;
use tournament_backend::models::team::Team;

pub fn team_ids(count: usize) -> Vec<Uuid> {
    (0..count).map(|_| Uuid::new_v4()).collect()
}

pub fn roster(count: usize) -> GroupRoster {
    GroupRoster::new(Uuid::new_v4(), team_ids(count))
}

pub fn team(name: &str) -> Team {
    Team {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        group_id: None,
        name: name.to_string(),
        created_at: Utc::now(),
    }
}

/// A match between two teams, decided when both scores are given
pub fn decided_match(home: &Team, away: &Team, round: i32, score: Option<(i32, i32)>) -> Match {
    Match {
        id: Uuid::new_v4(),
        tenant_id: home.tenant_id,
        group_id: Uuid::new_v4(),
        home_team_id: home.id,
        away_team_id: away.id,
        round_number: round,
        leg: Leg::First,
        kickoff_at: None,
        home_score: score.map(|(h, _)| h),
        away_score: score.map(|(_, a)| a),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Every team appears at most once per round
pub fn assert_no_team_twice_per_round(fixtures: &[Fixture]) {
    let mut seen: HashSet<(Leg, i32, Uuid)> = HashSet::new();
    for fixture in fixtures {
        assert!(
            seen.insert((fixture.leg, fixture.round, fixture.team_x)),
            "team {} plays twice in round {}",
            fixture.team_x,
            fixture.round
        );
        assert!(
            seen.insert((fixture.leg, fixture.round, fixture.team_y)),
            "team {} plays twice in round {}",
            fixture.team_y,
            fixture.round
        );
    }
}

/// Distinct round numbers form `start..=end` with no gap
pub fn assert_consecutive_rounds(fixtures: &[Fixture], start: i32) -> i32 {
    let mut rounds: Vec<i32> = fixtures.iter().map(|f| f.round).collect();
    rounds.sort();
    rounds.dedup();
    let expected: Vec<i32> = (start..start + rounds.len() as i32).collect();
    assert_eq!(rounds, expected, "rounds are not consecutive from {}", start);
    rounds.last().copied().unwrap_or(start - 1)
}

pub fn pairs(fixtures: &[Fixture]) -> HashSet<TeamPair> {
    fixtures.iter().map(Fixture::pair).collect()
}
