use sqlx::PgPool;
use uuid::Uuid;

use crate::league::store::{MatchStore, TeamDirectory};
use crate::models::fixture::{NewMatch, TeamPair};
use crate::models::game::{Match, MatchWithTeams};

const MATCH_COLUMNS: &str = "id, tenant_id, group_id, home_team_id, away_team_id, round_number, leg, \
    kickoff_at, home_score, away_score, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_match(&self, new_match: &NewMatch) -> Result<Uuid, sqlx::Error> {
        let (id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO matches (
                id, tenant_id, group_id, home_team_id, away_team_id,
                round_number, leg, kickoff_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_match.tenant_id)
        .bind(new_match.group_id)
        .bind(new_match.home_team_id)
        .bind(new_match.away_team_id)
        .bind(new_match.round_number)
        .bind(new_match.leg.as_i16())
        .bind(new_match.kickoff_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            "Created match {}: round {} - {} (home) vs {} (away)",
            id,
            new_match.round_number,
            new_match.home_team_id,
            new_match.away_team_id
        );

        Ok(id)
    }

    pub async fn existing_pairs(&self, tenant_id: Uuid) -> Result<Vec<TeamPair>, sqlx::Error> {
        let rows: Vec<(Uuid, Uuid)> = sqlx::query_as(
            "SELECT home_team_id, away_team_id FROM matches WHERE tenant_id = $1",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(home, away)| TeamPair::new(home, away)).collect())
    }

    pub async fn get_match(&self, tenant_id: Uuid, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(&format!(
            "SELECT {} FROM matches WHERE id = $1 AND tenant_id = $2",
            MATCH_COLUMNS
        ))
        .bind(match_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Matches of a group, decided or not
    pub async fn group_matches(&self, tenant_id: Uuid, group_id: Uuid) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(&format!(
            "SELECT {} FROM matches WHERE tenant_id = $1 AND group_id = $2 ORDER BY round_number, kickoff_at",
            MATCH_COLUMNS
        ))
        .bind(tenant_id)
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_matches(
        &self,
        tenant_id: Uuid,
        group_id: Option<Uuid>,
        round: Option<i32>,
    ) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        sqlx::query_as::<_, MatchWithTeams>(
            r#"
            SELECT
                m.id, m.tenant_id, m.group_id, m.home_team_id, m.away_team_id,
                m.round_number, m.leg, m.kickoff_at, m.home_score, m.away_score,
                m.created_at, m.updated_at,
                ht.name AS home_team_name,
                awt.name AS away_team_name
            FROM matches m
            JOIN teams ht ON ht.id = m.home_team_id
            JOIN teams awt ON awt.id = m.away_team_id
            WHERE m.tenant_id = $1
            AND ($2::uuid IS NULL OR m.group_id = $2)
            AND ($3::int IS NULL OR m.round_number = $3)
            ORDER BY m.group_id, m.round_number, m.kickoff_at NULLS LAST, m.created_at
            "#,
        )
        .bind(tenant_id)
        .bind(group_id)
        .bind(round)
        .fetch_all(&self.pool)
        .await
    }

    /// Overwrite the score of a match
    pub async fn update_result(
        &self,
        tenant_id: Uuid,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> Result<Option<Match>, sqlx::Error> {
        let updated = sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET home_score = $3, away_score = $4, updated_at = NOW()
            WHERE id = $1 AND tenant_id = $2
            RETURNING {}
            "#,
            MATCH_COLUMNS
        ))
        .bind(match_id)
        .bind(tenant_id)
        .bind(home_score)
        .bind(away_score)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(game) = &updated {
            tracing::info!(
                "Updated match {}: {} - {}",
                game.id,
                home_score,
                away_score
            );
        }

        Ok(updated)
    }
}

/// Postgres-backed collaborator of the fixture service
#[derive(Debug, Clone)]
pub struct PgLeagueStore {
    pool: PgPool,
    matches: MatchQueries,
}

impl PgLeagueStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            matches: MatchQueries::new(pool.clone()),
            pool,
        }
    }
}

impl TeamDirectory for PgLeagueStore {
    async fn group_team_ids(
        &self,
        tenant_id: Uuid,
        group_id: Uuid,
    ) -> Result<Option<Vec<Uuid>>, sqlx::Error> {
        let group: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM groups WHERE id = $1 AND tenant_id = $2",
        )
        .bind(group_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        if group.is_none() {
            return Ok(None);
        }

        let rows: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM teams WHERE tenant_id = $1 AND group_id = $2 ORDER BY created_at, id",
        )
        .bind(tenant_id)
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(rows.into_iter().map(|(id,)| id).collect()))
    }
}

impl MatchStore for PgLeagueStore {
    async fn existing_pairs(&self, tenant_id: Uuid) -> Result<Vec<TeamPair>, sqlx::Error> {
        self.matches.existing_pairs(tenant_id).await
    }

    async fn insert_match(&self, new_match: &NewMatch) -> Result<Uuid, sqlx::Error> {
        self.matches.insert_match(new_match).await
    }
}
