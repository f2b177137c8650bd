//! Collaborator seams of the fixture service.
//!
//! The fixture core never talks to Postgres directly. It reads team lists and
//! existing match pairs, and writes confirmed fixtures, through these traits.
//! `crate::db::match_queries::PgLeagueStore` is the production implementation.
#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::models::fixture::{NewMatch, TeamPair};

pub trait TeamDirectory {
    /// Team ids of a group in registration order, `None` if the group does
    /// not belong to the tenant
    async fn group_team_ids(
        &self,
        tenant_id: Uuid,
        group_id: Uuid,
    ) -> Result<Option<Vec<Uuid>>, sqlx::Error>;
}

pub trait MatchStore {
    /// Unordered team pairs of every persisted match of the tenant
    async fn existing_pairs(&self, tenant_id: Uuid) -> Result<Vec<TeamPair>, sqlx::Error>;

    /// Persist one match and return its id
    async fn insert_match(&self, new_match: &NewMatch) -> Result<Uuid, sqlx::Error>;
}
