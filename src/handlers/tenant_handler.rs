use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::TenantQueries;
use crate::handlers::response::{created_response, league_error_response, ok_response, require_tenant};
use crate::league::league::LeagueService;
use crate::league::validation::LeagueValidator;
use crate::league::LeagueError;
use crate::models::common::ApiResponse;
use crate::models::tenant::CreateTenantRequest;
use crate::ok_or_return;

/// Register a new tenant
#[tracing::instrument(
    name = "Create tenant",
    skip(request, pool),
    fields(slug = %request.slug)
)]
pub async fn create_tenant(
    request: web::Json<CreateTenantRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let validator = LeagueValidator::new();
    let name = match validator.validate_tenant_name(&request.name) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Tenant validation failed: {}", e);
            return Ok(league_error_response(&e));
        }
    };
    let slug = match validator.validate_slug(&request.slug) {
        Ok(slug) => slug,
        Err(e) => {
            tracing::warn!("Tenant validation failed: {}", e);
            return Ok(league_error_response(&e));
        }
    };

    let queries = TenantQueries::new(pool.get_ref().clone());
    match queries.slug_exists(&slug).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error(format!(
                "Tenant slug '{}' is already taken",
                slug
            ))));
        }
        Ok(false) => {}
        Err(e) => return Ok(league_error_response(&LeagueError::Database(e))),
    }

    match queries.create_tenant(&name, &slug).await {
        Ok(tenant) => {
            tracing::info!("Created tenant {} ({})", tenant.id, tenant.slug);
            Ok(created_response("Tenant created successfully", tenant))
        }
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

#[tracing::instrument(name = "List tenants", skip(pool))]
pub async fn list_tenants(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match TenantQueries::new(pool.get_ref().clone()).list_tenants().await {
        Ok(tenants) => Ok(ok_response("Tenants retrieved successfully", tenants)),
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

#[tracing::instrument(name = "Get tenant", skip(pool), fields(tenant_id = %tenant_id))]
pub async fn get_tenant(tenant_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let tenant = ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);
    Ok(ok_response("Tenant retrieved successfully", tenant))
}

/// Dashboard counters for a tenant
#[tracing::instrument(name = "Get dashboard", skip(pool), fields(tenant_id = %tenant_id))]
pub async fn get_dashboard(tenant_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let league_service = LeagueService::new(pool.get_ref().clone());
    match league_service.dashboard(tenant_id).await {
        Ok(summary) => Ok(ok_response("Dashboard retrieved successfully", summary)),
        Err(e) => Ok(league_error_response(&e)),
    }
}
