// src/models/fixture.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which pass of the round robin a fixture belongs to.
/// Serialized as `1` (first leg) or `2` (return leg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Leg {
    First,
    Return,
}

impl Leg {
    pub fn as_i16(&self) -> i16 {
        match self {
            Leg::First => 1,
            Leg::Return => 2,
        }
    }
}

impl From<Leg> for u8 {
    fn from(leg: Leg) -> Self {
        leg.as_i16() as u8
    }
}

impl TryFrom<u8> for Leg {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Leg::First),
            2 => Ok(Leg::Return),
            other => Err(format!("{} is not a valid leg. Use 1 or 2.", other)),
        }
    }
}

impl TryFrom<i16> for Leg {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| format!("{} is not a valid leg. Use 1 or 2.", value))
            .and_then(Leg::try_from)
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::First => write!(f, "first leg"),
            Leg::Return => write!(f, "return leg"),
        }
    }
}

/// How the return leg gets its rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReturnLegPolicy {
    /// Reversed fixtures distributed again after the last first-leg round
    #[default]
    Sequential,
    /// Every first-leg round repeated with home and away flipped
    Mirrored,
}

/// How fixtures of a leg are packed into rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundStrategy {
    /// Single pass per round over the fixtures in insertion order
    #[default]
    Greedy,
    /// Circle method: N-1 rounds for even N, N rounds for odd N
    Circle,
}

impl TryFrom<String> for RoundStrategy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "circle" => Ok(Self::Circle),
            other => Err(format!(
                "{} is not a supported round strategy. Use either `greedy` or `circle`.",
                other
            )),
        }
    }
}

/// Unordered pair of team ids, smaller id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamPair(Uuid, Uuid);

impl TeamPair {
    pub fn new(a: Uuid, b: Uuid) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// A generated, not yet persisted match between two teams of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub team_x: Uuid,
    pub team_y: Uuid,
    pub group_id: Uuid,
    pub leg: Leg,
    pub round: i32,
    pub home_team_id: Uuid,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

impl Fixture {
    /// Fixture with `team_x` at home and the round left at 0 for distribution
    pub fn new(group_id: Uuid, team_x: Uuid, team_y: Uuid, leg: Leg) -> Self {
        Self {
            team_x,
            team_y,
            group_id,
            leg,
            round: 0,
            home_team_id: team_x,
            date: None,
            time: None,
        }
    }

    pub fn away_team_id(&self) -> Uuid {
        if self.home_team_id == self.team_x {
            self.team_y
        } else {
            self.team_x
        }
    }

    pub fn involves(&self, team_id: Uuid) -> bool {
        self.team_x == team_id || self.team_y == team_id
    }

    pub fn pair(&self) -> TeamPair {
        TeamPair::new(self.team_x, self.team_y)
    }

    /// Return-leg counterpart: teams swapped and the previous away side at home
    pub fn reversed(&self) -> Self {
        Self {
            team_x: self.team_y,
            team_y: self.team_x,
            group_id: self.group_id,
            leg: Leg::Return,
            round: 0,
            home_team_id: self.away_team_id(),
            date: None,
            time: None,
        }
    }

    /// Kickoff timestamp, falling back to `default_time` when only a date is set
    pub fn kickoff_at(&self, default_time: NaiveTime) -> Option<DateTime<Utc>> {
        self.date
            .map(|date| date.and_time(self.time.unwrap_or(default_time)).and_utc())
    }
}

/// Ordered teams of one group, the input of fixture generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRoster {
    pub group_id: Uuid,
    pub team_ids: Vec<Uuid>,
}

impl GroupRoster {
    pub fn new(group_id: Uuid, team_ids: Vec<Uuid>) -> Self {
        Self { group_id, team_ids }
    }
}

/// Dates the rounds of a generated schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    pub first_round_date: NaiveDate,
    #[serde(default = "default_days_between_rounds")]
    pub days_between_rounds: i64,
    #[serde(default)]
    pub kickoff_time: Option<NaiveTime>,
}

fn default_days_between_rounds() -> i64 {
    7
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default)]
    pub return_leg: bool,
    #[serde(default)]
    pub return_leg_policy: ReturnLegPolicy,
    /// Falls back to the configured strategy when absent
    #[serde(default)]
    pub round_strategy: Option<RoundStrategy>,
    #[serde(default)]
    pub shuffle_teams: bool,
    #[serde(default)]
    pub schedule: Option<ScheduleOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group_id: Uuid,
    pub team_count: usize,
    pub fixture_count: usize,
    pub round_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub fixtures: Vec<Fixture>,
    pub groups: Vec<GroupSummary>,
    /// Groups with fewer than two teams
    pub skipped_groups: Vec<Uuid>,
}

/// Collision counts of candidate fixtures against persisted matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub existing: usize,
    pub new: usize,
    pub total: usize,
    /// Positions in the candidate list that collide
    pub conflicting: Vec<usize>,
}

impl DuplicateReport {
    pub fn has_conflicts(&self) -> bool {
        self.existing > 0
    }
}

/// `verified` is false when the lookup of existing matches failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    pub verified: bool,
    pub report: DuplicateReport,
}

// Request/Response DTOs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateFixturesRequest {
    pub group_ids: Vec<Uuid>,
    #[serde(flatten)]
    pub options: GenerationOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturePreview {
    pub outcome: GenerationOutcome,
    pub duplicate_check: DuplicateCheck,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFixturesRequest {
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitFixturesRequest {
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub confirm_duplicates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitOutcome {
    pub saved: usize,
    pub match_ids: Vec<Uuid>,
    pub duplicate_check: DuplicateCheck,
}

/// Row written by the persistence sink for one confirmed fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub tenant_id: Uuid,
    pub group_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub round_number: i32,
    pub leg: Leg,
    pub kickoff_at: Option<DateTime<Utc>>,
}

impl NewMatch {
    pub fn from_fixture(tenant_id: Uuid, fixture: &Fixture, default_kickoff: NaiveTime) -> Self {
        Self {
            tenant_id,
            group_id: fixture.group_id,
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id(),
            round_number: fixture.round,
            leg: fixture.leg,
            kickoff_at: fixture.kickoff_at(default_kickoff),
        }
    }
}
