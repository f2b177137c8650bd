// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Group {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Group listing row with the number of teams currently assigned to it
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct GroupWithTeamCount {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub team_count: i64,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub group_id: Option<Uuid>,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub shirt_number: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Request to register a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRegistrationRequest {
    pub name: String,
    pub group_id: Option<Uuid>,
}

/// Request to update team information.
/// `group_id: Some(None)` removes the team from its group.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TeamUpdateRequest {
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub group_id: Option<Option<Uuid>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerRegistrationRequest {
    pub name: String,
    pub shirt_number: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TeamListQuery {
    pub group_id: Option<Uuid>,
}

/// Distinguishes a missing field from an explicit `null`
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
