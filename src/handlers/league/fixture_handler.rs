use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::FixtureDefaults;
use crate::db::PgLeagueStore;
use crate::handlers::response::{created_response, league_error_response, ok_response, require_tenant};
use crate::league::FixtureService;
use crate::models::fixture::*;
use crate::ok_or_return;

fn fixture_service(pool: &PgPool, defaults: &FixtureDefaults) -> FixtureService<PgLeagueStore> {
    FixtureService::new(PgLeagueStore::new(pool.clone()), *defaults)
}

/// Generate a fixture preview for the selected groups. Nothing is saved.
#[tracing::instrument(
    name = "Generate fixtures",
    skip(request, pool, defaults),
    fields(
        tenant_id = %tenant_id,
        groups = request.group_ids.len(),
        return_leg = request.options.return_leg
    )
)]
pub async fn generate_fixtures(
    tenant_id: Uuid,
    request: web::Json<GenerateFixturesRequest>,
    pool: web::Data<PgPool>,
    defaults: web::Data<FixtureDefaults>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let service = fixture_service(pool.get_ref(), defaults.get_ref());
    match service.preview(tenant_id, &request).await {
        Ok(preview) => {
            tracing::info!(
                "Generated {} fixtures ({} groups skipped, {} already exist)",
                preview.outcome.fixtures.len(),
                preview.outcome.skipped_groups.len(),
                preview.duplicate_check.report.existing
            );
            Ok(ok_response("Fixtures generated successfully", preview))
        }
        Err(e) => {
            tracing::warn!("Fixture generation failed: {}", e);
            Ok(league_error_response(&e))
        }
    }
}

/// Duplicate check for an edited preview
#[tracing::instrument(
    name = "Check fixtures",
    skip(request, pool, defaults),
    fields(tenant_id = %tenant_id, fixtures = request.fixtures.len())
)]
pub async fn check_fixtures(
    tenant_id: Uuid,
    request: web::Json<CheckFixturesRequest>,
    pool: web::Data<PgPool>,
    defaults: web::Data<FixtureDefaults>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let service = fixture_service(pool.get_ref(), defaults.get_ref());
    let check = service.check_duplicates(tenant_id, &request.fixtures).await;
    Ok(ok_response("Duplicate check completed", check))
}

#[tracing::instrument(
    name = "Commit fixtures",
    skip(request, pool, defaults),
    fields(
        tenant_id = %tenant_id,
        fixtures = request.fixtures.len(),
        confirm_duplicates = request.confirm_duplicates
    )
)]
pub async fn commit_fixtures(
    tenant_id: Uuid,
    request: web::Json<CommitFixturesRequest>,
    pool: web::Data<PgPool>,
    defaults: web::Data<FixtureDefaults>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let service = fixture_service(pool.get_ref(), defaults.get_ref());
    match service.commit(tenant_id, &request).await {
        Ok(outcome) => Ok(created_response("Fixtures saved successfully", outcome)),
        Err(e) => Ok(league_error_response(&e)),
    }
}
