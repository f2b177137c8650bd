use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::TeamQueries;
use crate::handlers::response::{created_response, league_error_response, ok_response, require_tenant};
use crate::league::league::LeagueService;
use crate::league::validation::LeagueValidator;
use crate::league::LeagueError;
use crate::models::common::ApiResponse;
use crate::models::team::CreateGroupRequest;
use crate::ok_or_return;

#[tracing::instrument(
    name = "Create group",
    skip(request, pool),
    fields(tenant_id = %tenant_id, group_name = %request.name)
)]
pub async fn create_group(
    tenant_id: Uuid,
    request: web::Json<CreateGroupRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let name = match LeagueValidator::new().validate_group_name(&request.name) {
        Ok(name) => name,
        Err(e) => return Ok(league_error_response(&e)),
    };

    match TeamQueries::new(pool.get_ref().clone()).create_group(tenant_id, &name).await {
        Ok(group) => {
            tracing::info!("Created group {} '{}'", group.id, group.name);
            Ok(created_response("Group created successfully", group))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::<()>::error(format!(
                "A group named '{}' already exists",
                name
            ))))
        }
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

#[tracing::instrument(name = "List groups", skip(pool), fields(tenant_id = %tenant_id))]
pub async fn list_groups(tenant_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    match TeamQueries::new(pool.get_ref().clone()).list_groups(tenant_id).await {
        Ok(groups) => Ok(ok_response("Groups retrieved successfully", groups)),
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

/// Current table of a group
#[tracing::instrument(
    name = "Get group standings",
    skip(pool),
    fields(tenant_id = %tenant_id, group_id = %group_id)
)]
pub async fn get_group_standings(
    tenant_id: Uuid,
    group_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.group_standings(tenant_id, group_id).await {
        Ok(standings) => {
            tracing::info!("Computed standings for {} teams", standings.standings.len());
            Ok(ok_response("Standings retrieved successfully", standings))
        }
        Err(e) => Ok(league_error_response(&e)),
    }
}
