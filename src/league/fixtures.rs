use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::league::calendar::RoundCalendar;
use crate::league::error::LeagueError;
use crate::league::rounds::distribute_rounds;
use crate::league::validation::LeagueValidator;
use crate::models::fixture::*;

/// Builds round-robin fixtures for groups, optionally with a return leg
pub struct FixtureGenerator {
    default_strategy: RoundStrategy,
    calendar: RoundCalendar,
    validator: LeagueValidator,
}

impl FixtureGenerator {
    pub fn new(default_strategy: RoundStrategy) -> Self {
        Self {
            default_strategy,
            calendar: RoundCalendar::new(),
            validator: LeagueValidator::new(),
        }
    }

    /// Every team meets every other team once, `team_x` listed first.
    /// Rounds are left at 0 for distribution.
    pub fn first_leg(&self, roster: &GroupRoster) -> Vec<Fixture> {
        let teams = &roster.team_ids;
        let mut fixtures = Vec::with_capacity(self.calculate_fixtures_per_leg(teams.len()));

        for i in 0..teams.len() {
            for j in (i + 1)..teams.len() {
                fixtures.push(Fixture::new(roster.group_id, teams[i], teams[j], Leg::First));
            }
        }

        fixtures
    }

    /// Reversed copy of the first leg, still to be distributed
    pub fn sequential_return_leg(&self, first_leg: &[Fixture]) -> Vec<Fixture> {
        first_leg.iter().map(Fixture::reversed).collect()
    }

    /// Reversed copy of an already distributed first leg, shifted by its last round
    pub fn mirrored_return_leg(&self, first_leg: &[Fixture], last_round: i32) -> Vec<Fixture> {
        first_leg
            .iter()
            .map(|fixture| {
                let mut reversed = fixture.reversed();
                reversed.round = fixture.round + last_round;
                reversed
            })
            .collect()
    }

    /// Fixtures of one group with rounds numbered from 1.
    /// Fewer than two teams yields no fixtures.
    pub fn generate_group<R: Rng + ?Sized>(
        &self,
        roster: &GroupRoster,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Vec<Fixture> {
        let team_count = roster.team_ids.len();
        if team_count < 2 {
            tracing::debug!("Group {} has {} teams, skipping", roster.group_id, team_count);
            return Vec::new();
        }

        let strategy = options.round_strategy.unwrap_or(self.default_strategy);
        let mut roster = roster.clone();
        if options.shuffle_teams {
            roster.team_ids.shuffle(rng);
        }

        let mut fixtures = self.first_leg(&roster);
        let last_round = distribute_rounds(&mut fixtures, team_count, 1, strategy);

        tracing::debug!(
            "Group {}: first leg has {} fixtures over {} rounds",
            roster.group_id,
            fixtures.len(),
            last_round
        );

        if options.return_leg {
            let return_leg = match options.return_leg_policy {
                ReturnLegPolicy::Sequential => {
                    let mut return_leg = self.sequential_return_leg(&fixtures);
                    distribute_rounds(&mut return_leg, team_count, last_round + 1, strategy);
                    return_leg
                }
                ReturnLegPolicy::Mirrored => self.mirrored_return_leg(&fixtures, last_round),
            };
            fixtures.extend(return_leg);
        }

        fixtures.sort_by_key(|fixture| (fixture.leg, fixture.round));

        if let Some(schedule) = &options.schedule {
            self.calendar.apply(&mut fixtures, schedule);
        }

        fixtures
    }

    /// Generate fixtures for every roster in order
    pub fn generate(
        &self,
        rosters: &[GroupRoster],
        options: &GenerationOptions,
    ) -> Result<GenerationOutcome, LeagueError> {
        self.generate_with_rng(rosters, options, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rosters: &[GroupRoster],
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Result<GenerationOutcome, LeagueError> {
        self.validator.validate_generation_options(options)?;

        let mut seen_groups = HashSet::new();
        for roster in rosters {
            if !seen_groups.insert(roster.group_id) {
                return Err(LeagueError::validation(format!(
                    "Group {} selected more than once",
                    roster.group_id
                )));
            }
            self.validator.validate_roster(roster)?;
        }

        tracing::info!("Generating fixtures for {} groups", rosters.len());

        let mut outcome = GenerationOutcome::default();
        for roster in rosters {
            let fixtures = self.generate_group(roster, options, rng);
            if fixtures.is_empty() {
                outcome.skipped_groups.push(roster.group_id);
                continue;
            }

            outcome.groups.push(GroupSummary {
                group_id: roster.group_id,
                team_count: roster.team_ids.len(),
                fixture_count: fixtures.len(),
                round_count: fixtures.iter().map(|f| f.round).max().unwrap_or(0),
            });
            outcome.fixtures.extend(fixtures);
        }

        if outcome.fixtures.is_empty() {
            tracing::warn!("No fixtures could be generated for the selected groups");
            return Err(LeagueError::NoFixturesGenerated);
        }

        tracing::info!(
            "Generated {} fixtures, skipped {} groups",
            outcome.fixtures.len(),
            outcome.skipped_groups.len()
        );

        Ok(outcome)
    }

    /// Fixtures in one leg for `team_count` teams
    pub fn calculate_fixtures_per_leg(&self, team_count: usize) -> usize {
        if team_count < 2 {
            return 0;
        }
        team_count * (team_count - 1) / 2
    }

    /// Fewest rounds a single leg can take
    pub fn calculate_minimum_rounds_per_leg(&self, team_count: usize) -> i32 {
        match team_count {
            0 | 1 => 0,
            n if n % 2 == 0 => (n - 1) as i32,
            n => n as i32,
        }
    }
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new(RoundStrategy::default())
    }
}
