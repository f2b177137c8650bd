use sqlx::PgPool;
use uuid::Uuid;

use crate::models::team::{Group, GroupWithTeamCount, Player, Team};

/// Groups, teams and players of a tenant
#[derive(Debug, Clone)]
pub struct TeamQueries {
    pool: PgPool,
}

impl TeamQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_group(&self, tenant_id: Uuid, name: &str) -> Result<Group, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (id, tenant_id, name)
            VALUES ($1, $2, $3)
            RETURNING id, tenant_id, name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tenant_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_group(&self, tenant_id: Uuid, group_id: Uuid) -> Result<Option<Group>, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            "SELECT id, tenant_id, name, created_at FROM groups WHERE id = $1 AND tenant_id = $2",
        )
        .bind(group_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_groups(&self, tenant_id: Uuid) -> Result<Vec<GroupWithTeamCount>, sqlx::Error> {
        sqlx::query_as::<_, GroupWithTeamCount>(
            r#"
            SELECT g.id, g.tenant_id, g.name, g.created_at, COUNT(t.id) AS team_count
            FROM groups g
            LEFT JOIN teams t ON t.group_id = g.id
            WHERE g.tenant_id = $1
            GROUP BY g.id
            ORDER BY g.name
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_team(
        &self,
        tenant_id: Uuid,
        name: &str,
        group_id: Option<Uuid>,
    ) -> Result<Team, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (id, tenant_id, group_id, name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tenant_id, group_id, name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tenant_id)
        .bind(group_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_team(&self, tenant_id: Uuid, team_id: Uuid) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "SELECT id, tenant_id, group_id, name, created_at FROM teams WHERE id = $1 AND tenant_id = $2",
        )
        .bind(team_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Teams of the tenant in registration order, optionally limited to one group
    pub async fn list_teams(&self, tenant_id: Uuid, group_id: Option<Uuid>) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT id, tenant_id, group_id, name, created_at
            FROM teams
            WHERE tenant_id = $1 AND ($2::uuid IS NULL OR group_id = $2)
            ORDER BY created_at, id
            "#,
        )
        .bind(tenant_id)
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn update_team(
        &self,
        tenant_id: Uuid,
        team_id: Uuid,
        name: &str,
        group_id: Option<Uuid>,
    ) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $3, group_id = $4
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, group_id, name, created_at
            "#,
        )
        .bind(team_id)
        .bind(tenant_id)
        .bind(name)
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create_player(
        &self,
        tenant_id: Uuid,
        team_id: Uuid,
        name: &str,
        shirt_number: Option<i32>,
    ) -> Result<Player, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (id, tenant_id, team_id, name, shirt_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, tenant_id, team_id, name, shirt_number, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tenant_id)
        .bind(team_id)
        .bind(name)
        .bind(shirt_number)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_player(&self, tenant_id: Uuid, player_id: Uuid) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            r#"
            SELECT id, tenant_id, team_id, name, shirt_number, created_at
            FROM players
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(player_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_players(&self, tenant_id: Uuid, team_id: Uuid) -> Result<Vec<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            r#"
            SELECT id, tenant_id, team_id, name, shirt_number, created_at
            FROM players
            WHERE tenant_id = $1 AND team_id = $2
            ORDER BY shirt_number NULLS LAST, name
            "#,
        )
        .bind(tenant_id)
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
    }
}
