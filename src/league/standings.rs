use std::cmp::Ordering;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::game::Match;
use crate::models::standings::StandingRow;
use crate::models::team::Team;

const FORM_LENGTH: usize = 5;

/// Table for `teams` from their decided matches, sorted and numbered from 1.
/// Matches that are undecided or do not involve a listed team are ignored.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingRow> {
    let mut rows: HashMap<Uuid, StandingRow> = teams
        .iter()
        .map(|team| (team.id, StandingRow::empty(team.id, team.name.clone())))
        .collect();

    let mut decided: Vec<&Match> = matches.iter().filter(|m| m.is_decided()).collect();
    decided.sort_by_key(|m| (m.round_number, m.kickoff_at));

    for game in decided {
        for team_id in [game.home_team_id, game.away_team_id] {
            let (Some(row), Some((goals_for, goals_against))) =
                (rows.get_mut(&team_id), game.score_for(team_id))
            else {
                continue;
            };
            record_result(row, goals_for, goals_against);
        }
    }

    let mut standings: Vec<StandingRow> = rows.into_values().collect();
    standings.sort_by(compare_rows);
    for (index, row) in standings.iter_mut().enumerate() {
        row.position = (index + 1) as u32;
    }

    standings
}

fn record_result(row: &mut StandingRow, goals_for: i32, goals_against: i32) {
    let result = MatchResult::from_goals(goals_for, goals_against);

    row.games_played += 1;
    row.goals_for += goals_for;
    row.goals_against += goals_against;
    row.goal_difference = row.goals_for - row.goals_against;
    row.points += result.points();
    match result {
        MatchResult::Win => row.wins += 1,
        MatchResult::Draw => row.draws += 1,
        MatchResult::Loss => row.losses += 1,
    }

    row.recent_form.push(result);
    if row.recent_form.len() > FORM_LENGTH {
        row.recent_form.remove(0);
    }
}

/// Points, then goal difference, then goals scored, all descending.
/// Team name breaks remaining ties.
fn compare_rows(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_name.cmp(&b.team_name))
}
