use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::tenant_handler;
use crate::models::tenant::CreateTenantRequest;

#[post("")]
pub async fn create_tenant(
    request: web::Json<CreateTenantRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tenant_handler::create_tenant(request, pool).await
}

#[get("")]
pub async fn list_tenants(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tenant_handler::list_tenants(pool).await
}

#[get("/{tenant_id}")]
pub async fn get_tenant(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    tenant_handler::get_tenant(tenant_id, pool).await
}

/// Counters for the tenant's dashboard
#[get("/{tenant_id}/dashboard")]
pub async fn get_dashboard(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    tenant_handler::get_dashboard(tenant_id, pool).await
}
