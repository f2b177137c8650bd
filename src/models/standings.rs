// src/models/standings.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common::MatchResult;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub position: u32,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u32,
    /// Last five decided results, oldest first
    pub recent_form: Vec<MatchResult>,
}

impl StandingRow {
    pub fn empty(team_id: Uuid, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            position: 0,
            games_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            recent_form: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupStandingsResponse {
    pub group_id: Uuid,
    pub group_name: String,
    pub standings: Vec<StandingRow>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScorerRow {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub team_name: String,
    pub goals: u32,
    pub assists: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisciplineRow {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub team_name: String,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScorersResponse {
    pub scorers: Vec<ScorerRow>,
    pub discipline: Vec<DisciplineRow>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ScorersQuery {
    pub limit: Option<usize>,
}
