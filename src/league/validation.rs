use std::collections::HashSet;

use crate::league::error::LeagueError;
use crate::models::fixture::{Fixture, GenerationOptions, GroupRoster};

const MAX_TEAMS_PER_GROUP: usize = 64;
const MAX_REASONABLE_SCORE: i32 = 50;
const MAX_EVENT_MINUTE: i32 = 130;

/// Centralized validation for data entering the league core
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Trim, strip null bytes and check a display name. Returns the cleaned name.
    pub fn validate_name(&self, kind: &str, name: &str, max_len: usize) -> Result<String, LeagueError> {
        let sanitized = self.sanitize_string_input(name);

        if sanitized.is_empty() {
            return Err(LeagueError::validation(format!("{} name cannot be empty", kind)));
        }

        if sanitized.chars().count() > max_len {
            return Err(LeagueError::validation(format!(
                "{} name too long (maximum {} characters)",
                kind, max_len
            )));
        }

        // Ensure name has actual content (not just whitespace/special chars)
        if !sanitized.chars().any(|c| c.is_alphanumeric()) {
            return Err(LeagueError::validation(format!(
                "{} name must contain alphanumeric characters",
                kind
            )));
        }

        Ok(sanitized)
    }

    pub fn validate_team_name(&self, name: &str) -> Result<String, LeagueError> {
        self.validate_name("Team", name, 100)
    }

    pub fn validate_group_name(&self, name: &str) -> Result<String, LeagueError> {
        self.validate_name("Group", name, 100)
    }

    pub fn validate_player_name(&self, name: &str) -> Result<String, LeagueError> {
        self.validate_name("Player", name, 100)
    }

    pub fn validate_tenant_name(&self, name: &str) -> Result<String, LeagueError> {
        self.validate_name("Tenant", name, 255)
    }

    /// Lowercase ASCII letters, digits and single dashes
    pub fn validate_slug(&self, slug: &str) -> Result<String, LeagueError> {
        let slug = slug.trim().to_lowercase();

        if slug.is_empty() || slug.len() > 63 {
            return Err(LeagueError::validation("Slug must be between 1 and 63 characters"));
        }

        let valid_chars = slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_chars || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
            return Err(LeagueError::validation(format!(
                "Slug '{}' may only contain lowercase letters, digits and single dashes",
                slug
            )));
        }

        Ok(slug)
    }

    pub fn validate_shirt_number(&self, shirt_number: Option<i32>) -> Result<(), LeagueError> {
        match shirt_number {
            Some(number) if !(0..=99).contains(&number) => Err(LeagueError::validation(format!(
                "Shirt number must be between 0 and 99, got {}",
                number
            ))),
            _ => Ok(()),
        }
    }

    /// Team list of one group as it enters generation
    pub fn validate_roster(&self, roster: &GroupRoster) -> Result<(), LeagueError> {
        if roster.group_id.is_nil() {
            return Err(LeagueError::validation("Nil UUID not allowed for group ID"));
        }

        if roster.team_ids.len() > MAX_TEAMS_PER_GROUP {
            return Err(LeagueError::validation(format!(
                "Maximum {} teams per group allowed, got {}",
                MAX_TEAMS_PER_GROUP,
                roster.team_ids.len()
            )));
        }

        let mut unique_teams = HashSet::new();
        for team_id in &roster.team_ids {
            if team_id.is_nil() {
                return Err(LeagueError::validation("Nil UUID not allowed for team ID"));
            }
            if !unique_teams.insert(team_id) {
                return Err(LeagueError::validation(format!(
                    "Duplicate team ID found in group {}: {}",
                    roster.group_id, team_id
                )));
            }
        }

        Ok(())
    }

    pub fn validate_generation_options(&self, options: &GenerationOptions) -> Result<(), LeagueError> {
        if let Some(schedule) = &options.schedule {
            if !(1..=365).contains(&schedule.days_between_rounds) {
                return Err(LeagueError::validation(format!(
                    "Days between rounds must be between 1 and 365, got {}",
                    schedule.days_between_rounds
                )));
            }
        }
        Ok(())
    }

    /// Single fixture as submitted for saving
    pub fn validate_fixture(&self, fixture: &Fixture) -> Result<(), LeagueError> {
        if fixture.team_x.is_nil() || fixture.team_y.is_nil() || fixture.group_id.is_nil() {
            return Err(LeagueError::validation("Nil UUID not allowed in fixture"));
        }

        if fixture.team_x == fixture.team_y {
            return Err(LeagueError::validation(format!(
                "Team {} cannot play against itself",
                fixture.team_x
            )));
        }

        if !fixture.involves(fixture.home_team_id) {
            return Err(LeagueError::validation(format!(
                "Home team {} is not part of the fixture",
                fixture.home_team_id
            )));
        }

        self.validate_round_number(fixture.round)
    }

    /// Fixture batch submitted for saving
    pub fn validate_fixtures(&self, fixtures: &[Fixture]) -> Result<(), LeagueError> {
        if fixtures.is_empty() {
            return Err(LeagueError::validation("No fixtures to save"));
        }

        let mut seen = HashSet::new();
        for fixture in fixtures {
            self.validate_fixture(fixture)?;
            if !seen.insert((fixture.group_id, fixture.leg, fixture.pair())) {
                return Err(LeagueError::validation(format!(
                    "Fixture {} vs {} appears twice in the {}",
                    fixture.team_x, fixture.team_y, fixture.leg
                )));
            }
        }

        Ok(())
    }

    pub fn validate_round_number(&self, round: i32) -> Result<(), LeagueError> {
        if round < 1 {
            return Err(LeagueError::validation(format!(
                "Round number must be positive: {}",
                round
            )));
        }
        Ok(())
    }

    /// Validate match scores
    pub fn validate_match_scores(&self, home_score: i32, away_score: i32) -> Result<(), LeagueError> {
        // Scores cannot be negative
        if home_score < 0 {
            return Err(LeagueError::validation(format!(
                "Home score cannot be negative: {}",
                home_score
            )));
        }

        if away_score < 0 {
            return Err(LeagueError::validation(format!(
                "Away score cannot be negative: {}",
                away_score
            )));
        }

        // Reasonable upper limit (prevent obvious data entry errors)
        if home_score > MAX_REASONABLE_SCORE {
            return Err(LeagueError::validation(format!(
                "Home score too high: {} (max {})",
                home_score, MAX_REASONABLE_SCORE
            )));
        }

        if away_score > MAX_REASONABLE_SCORE {
            return Err(LeagueError::validation(format!(
                "Away score too high: {} (max {})",
                away_score, MAX_REASONABLE_SCORE
            )));
        }

        Ok(())
    }

    pub fn validate_event_minute(&self, minute: Option<i32>) -> Result<(), LeagueError> {
        match minute {
            Some(m) if !(0..=MAX_EVENT_MINUTE).contains(&m) => Err(LeagueError::validation(format!(
                "Event minute must be between 0 and {}, got {}",
                MAX_EVENT_MINUTE, m
            ))),
            _ => Ok(()),
        }
    }

    /// Validate a list limit, defaulting to 10
    pub fn validate_limit(&self, limit: Option<usize>) -> Result<usize, LeagueError> {
        let limit = limit.unwrap_or(10);

        if limit < 1 {
            return Err(LeagueError::validation("Limit must be positive"));
        }

        if limit > 100 {
            return Err(LeagueError::validation("Limit too high (max 100)"));
        }

        Ok(limit)
    }

    /// Comprehensive input sanitization
    pub fn sanitize_string_input(&self, input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|&c| c != '\0') // Remove null bytes
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
