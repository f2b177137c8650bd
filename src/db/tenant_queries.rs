use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tenant::{DashboardSummary, Tenant};

#[derive(Debug, Clone)]
pub struct TenantQueries {
    pool: PgPool,
}

impl TenantQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_tenant(&self, name: &str, slug: &str) -> Result<Tenant, sqlx::Error> {
        sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (id, name, slug)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(slug)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_tenant(&self, tenant_id: Uuid) -> Result<Option<Tenant>, sqlx::Error> {
        sqlx::query_as::<_, Tenant>(
            "SELECT id, name, slug, created_at FROM tenants WHERE id = $1",
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, sqlx::Error> {
        sqlx::query_as::<_, Tenant>(
            "SELECT id, name, slug, created_at FROM tenants ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM tenants WHERE slug = $1)",
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn dashboard_summary(&self, tenant_id: Uuid) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM groups WHERE tenant_id = $1) AS groups,
                (SELECT COUNT(*) FROM teams WHERE tenant_id = $1) AS teams,
                (SELECT COUNT(*) FROM players WHERE tenant_id = $1) AS players,
                (SELECT COUNT(*) FROM matches
                    WHERE tenant_id = $1 AND (home_score IS NULL OR away_score IS NULL)) AS matches_scheduled,
                (SELECT COUNT(*) FROM matches
                    WHERE tenant_id = $1 AND home_score IS NOT NULL AND away_score IS NOT NULL) AS matches_played,
                (SELECT COALESCE(SUM(home_score + away_score), 0)::BIGINT FROM matches
                    WHERE tenant_id = $1 AND home_score IS NOT NULL AND away_score IS NOT NULL) AS total_goals
            "#,
        )
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await
    }
}
