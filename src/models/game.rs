// src/models/game.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;

use crate::models::fixture::Leg;

/// A persisted match. Both scores are set once the match is decided.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub group_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub round_number: i32,
    #[sqlx(try_from = "i16")]
    pub leg: Leg,
    pub kickoff_at: Option<DateTime<Utc>>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn is_decided(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Goals (for, against) from `team_id`'s side, if decided and involved
    pub fn score_for(&self, team_id: Uuid) -> Option<(i32, i32)> {
        let (home, away) = (self.home_score?, self.away_score?);
        if team_id == self.home_team_id {
            Some((home, away))
        } else if team_id == self.away_team_id {
            Some((away, home))
        } else {
            None
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchWithTeams {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub game: Match,
    pub home_team_name: String,
    pub away_team_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    Assist,
    YellowCard,
    RedCard,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Goal => "goal",
            EventKind::Assist => "assist",
            EventKind::YellowCard => "yellow_card",
            EventKind::RedCard => "red_card",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub player_id: Option<Uuid>,
    pub kind: EventKind,
    pub minute: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Event joined with the player's name, input of scorer tables
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerEvent {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub team_name: String,
    pub kind: EventKind,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMatchEventRequest {
    pub team_id: Uuid,
    pub player_id: Option<Uuid>,
    pub kind: EventKind,
    pub minute: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct MatchListQuery {
    pub group_id: Option<Uuid>,
    pub round: Option<i32>,
}

impl fmt::Display for MatchListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group_id: {:?}, round: {:?}", self.group_id, self.round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(leg: Leg) -> Match {
        Match {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            round_number: 4,
            leg,
            kickoff_at: None,
            home_score: Some(1),
            away_score: Some(3),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_match_leg_serializes_as_integer() {
        let json = serde_json::to_value(sample_match(Leg::Return)).unwrap();
        assert_eq!(json["leg"], 2);

        let back: Match = serde_json::from_value(json).unwrap();
        assert_eq!(back.leg, Leg::Return);
    }

    #[test]
    fn test_stored_leg_decodes_from_smallint() {
        assert_eq!(Leg::try_from(1i16), Ok(Leg::First));
        assert_eq!(Leg::try_from(2i16), Ok(Leg::Return));
        assert!(Leg::try_from(3i16).is_err());
        assert!(Leg::try_from(-1i16).is_err());
    }

    #[test]
    fn test_score_for_each_side() {
        let game = sample_match(Leg::First);
        assert_eq!(game.score_for(game.home_team_id), Some((1, 3)));
        assert_eq!(game.score_for(game.away_team_id), Some((3, 1)));
        assert_eq!(game.score_for(Uuid::new_v4()), None);
    }
}
