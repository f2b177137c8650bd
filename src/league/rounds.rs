use std::collections::{BTreeSet, HashMap, HashSet};
use uuid::Uuid;

use crate::models::fixture::{Fixture, RoundStrategy, TeamPair};

/// Most fixtures a round can hold for a group of `team_count` teams
pub fn max_fixtures_per_round(team_count: usize) -> usize {
    (team_count / 2).max(1)
}

/// Assign consecutive round numbers from `starting_round` so that no team
/// plays twice in a round. Returns the last round assigned, or
/// `starting_round - 1` when there is nothing to distribute.
pub fn distribute_rounds(
    fixtures: &mut [Fixture],
    team_count: usize,
    starting_round: i32,
    strategy: RoundStrategy,
) -> i32 {
    match strategy {
        RoundStrategy::Greedy => distribute_greedy(fixtures, team_count, starting_round),
        RoundStrategy::Circle => distribute_circle(fixtures, starting_round)
            .unwrap_or_else(|| {
                tracing::debug!("Fixture set is not a simple round robin, falling back to greedy");
                distribute_greedy(fixtures, team_count, starting_round)
            }),
    }
}

/// Fills each round front to back, scanning pending fixtures in insertion order.
/// Not guaranteed to reach the minimal number of rounds.
pub fn distribute_greedy(fixtures: &mut [Fixture], team_count: usize, starting_round: i32) -> i32 {
    let per_round = max_fixtures_per_round(team_count);
    let mut pending: Vec<usize> = (0..fixtures.len()).collect();
    let mut round = starting_round;

    while !pending.is_empty() {
        let mut used: HashSet<Uuid> = HashSet::new();
        let mut placed = 0;

        pending.retain(|&index| {
            if placed >= per_round {
                return true;
            }
            let fixture = &mut fixtures[index];
            if used.contains(&fixture.team_x) || used.contains(&fixture.team_y) {
                return true;
            }
            used.insert(fixture.team_x);
            used.insert(fixture.team_y);
            fixture.round = round;
            placed += 1;
            false
        });

        // Never leave a round empty while fixtures remain
        if placed == 0 {
            let index = pending.remove(0);
            fixtures[index].round = round;
        }

        round += 1;
    }

    round - 1
}

/// Circle method over the teams of the fixture set. `None` when a pair repeats
/// or a fixture pits a team against itself.
pub fn distribute_circle(fixtures: &mut [Fixture], starting_round: i32) -> Option<i32> {
    if fixtures.is_empty() {
        return Some(starting_round - 1);
    }

    let mut seen_pairs = HashSet::new();
    let mut teams: Vec<Uuid> = Vec::new();
    for fixture in fixtures.iter() {
        if fixture.team_x == fixture.team_y || !seen_pairs.insert(fixture.pair()) {
            return None;
        }
        for team in [fixture.team_x, fixture.team_y] {
            if !teams.contains(&team) {
                teams.push(team);
            }
        }
    }

    let slots = circle_rounds(&teams);
    let mut used_slots = BTreeSet::new();
    for fixture in fixtures.iter() {
        used_slots.insert(*slots.get(&fixture.pair())?);
    }

    // Compact to consecutive rounds in case the set is not a full round robin
    let compacted: HashMap<usize, i32> = used_slots
        .iter()
        .enumerate()
        .map(|(offset, slot)| (*slot, starting_round + offset as i32))
        .collect();

    for fixture in fixtures.iter_mut() {
        fixture.round = compacted[&slots[&fixture.pair()]];
    }

    Some(starting_round + used_slots.len() as i32 - 1)
}

/// Round slot (0-based) of every pair under the circle method. The first team
/// stays fixed while the others rotate; odd counts get a bye slot.
fn circle_rounds(teams: &[Uuid]) -> HashMap<TeamPair, usize> {
    let mut ring: Vec<Option<Uuid>> = teams.iter().copied().map(Some).collect();
    if ring.len() % 2 == 1 {
        ring.push(None);
    }

    let n = ring.len();
    let mut slots = HashMap::new();
    if n < 2 {
        return slots;
    }

    for round in 0..n - 1 {
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (ring[i], ring[n - 1 - i]) {
                slots.insert(TeamPair::new(a, b), round);
            }
        }
        ring[1..].rotate_right(1);
    }

    slots
}

/// Fixtures grouped by round, for checks and display
pub fn fixtures_by_round(fixtures: &[Fixture]) -> Vec<(i32, Vec<&Fixture>)> {
    let mut rounds: Vec<(i32, Vec<&Fixture>)> = Vec::new();
    let mut ordered: Vec<&Fixture> = fixtures.iter().collect();
    ordered.sort_by_key(|fixture| fixture.round);

    for fixture in ordered {
        match rounds.last_mut() {
            Some((round, group)) if *round == fixture.round => group.push(fixture),
            _ => rounds.push((fixture.round, vec![fixture])),
        }
    }

    rounds
}
