use sqlx::PgPool;
use uuid::Uuid;

use crate::models::game::{EventKind, MatchEvent, PlayerEvent};

#[derive(Debug, Clone)]
pub struct EventQueries {
    pool: PgPool,
}

impl EventQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_event(
        &self,
        match_id: Uuid,
        team_id: Uuid,
        player_id: Option<Uuid>,
        kind: EventKind,
        minute: Option<i32>,
    ) -> Result<MatchEvent, sqlx::Error> {
        sqlx::query_as::<_, MatchEvent>(
            r#"
            INSERT INTO match_events (id, match_id, team_id, player_id, kind, minute)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, match_id, team_id, player_id, kind, minute, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(match_id)
        .bind(team_id)
        .bind(player_id)
        .bind(kind.as_str())
        .bind(minute)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_events(&self, match_id: Uuid) -> Result<Vec<MatchEvent>, sqlx::Error> {
        sqlx::query_as::<_, MatchEvent>(
            r#"
            SELECT id, match_id, team_id, player_id, kind, minute, created_at
            FROM match_events
            WHERE match_id = $1
            ORDER BY minute NULLS LAST, created_at
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Returns false when no event with that id belongs to the match
    pub async fn delete_event(&self, match_id: Uuid, event_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM match_events WHERE id = $1 AND match_id = $2")
            .bind(event_id)
            .bind(match_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every event of the tenant that names a player
    pub async fn player_events(&self, tenant_id: Uuid) -> Result<Vec<PlayerEvent>, sqlx::Error> {
        sqlx::query_as::<_, PlayerEvent>(
            r#"
            SELECT
                p.id AS player_id,
                p.name AS player_name,
                t.id AS team_id,
                t.name AS team_name,
                e.kind
            FROM match_events e
            JOIN matches m ON m.id = e.match_id
            JOIN players p ON p.id = e.player_id
            JOIN teams t ON t.id = e.team_id
            WHERE m.tenant_id = $1
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
    }
}
