// src/models/tenant.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A client organisation running its own tournaments
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTenantRequest {
    pub name: String,
    pub slug: String,
}

/// Counters shown on a tenant's dashboard
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub groups: i64,
    pub teams: i64,
    pub players: i64,
    pub matches_scheduled: i64,
    pub matches_played: i64,
    pub total_goals: i64,
}
