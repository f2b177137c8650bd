use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::TeamQueries;
use crate::handlers::response::{created_response, league_error_response, ok_response, require_tenant};
use crate::league::validation::LeagueValidator;
use crate::league::LeagueError;
use crate::models::team::*;
use crate::ok_or_return;

/// The group must exist and belong to the tenant
async fn check_group(queries: &TeamQueries, tenant_id: Uuid, group_id: Option<Uuid>) -> Result<(), LeagueError> {
    if let Some(group_id) = group_id {
        if queries.get_group(tenant_id, group_id).await?.is_none() {
            return Err(LeagueError::NotFound(format!("Group {}", group_id)));
        }
    }
    Ok(())
}

/// Register a new team
#[tracing::instrument(
    name = "Register team",
    skip(request, pool),
    fields(tenant_id = %tenant_id, team_name = %request.name)
)]
pub async fn register_team(
    tenant_id: Uuid,
    request: web::Json<TeamRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let name = match LeagueValidator::new().validate_team_name(&request.name) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Team registration validation failed: {}", e);
            return Ok(league_error_response(&e));
        }
    };

    let queries = TeamQueries::new(pool.get_ref().clone());
    if let Err(e) = check_group(&queries, tenant_id, request.group_id).await {
        return Ok(league_error_response(&e));
    }

    match queries.create_team(tenant_id, &name, request.group_id).await {
        Ok(team) => {
            tracing::info!("Registered team {} '{}'", team.id, team.name);
            Ok(created_response("Team registered successfully", team))
        }
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

#[tracing::instrument(
    name = "List teams",
    skip(query, pool),
    fields(tenant_id = %tenant_id, group_id = ?query.group_id)
)]
pub async fn list_teams(
    tenant_id: Uuid,
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    match TeamQueries::new(pool.get_ref().clone()).list_teams(tenant_id, query.group_id).await {
        Ok(teams) => Ok(ok_response("Teams retrieved successfully", teams)),
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

/// Rename a team or move it between groups
#[tracing::instrument(
    name = "Update team",
    skip(request, pool),
    fields(tenant_id = %tenant_id, team_id = %team_id)
)]
pub async fn update_team(
    tenant_id: Uuid,
    team_id: Uuid,
    request: web::Json<TeamUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let queries = TeamQueries::new(pool.get_ref().clone());

    let current = match queries.get_team(tenant_id, team_id).await {
        Ok(Some(team)) => team,
        Ok(None) => return Ok(league_error_response(&LeagueError::NotFound(format!("Team {}", team_id)))),
        Err(e) => return Ok(league_error_response(&LeagueError::Database(e))),
    };

    let name = match &request.name {
        Some(name) => match LeagueValidator::new().validate_team_name(name) {
            Ok(name) => name,
            Err(e) => return Ok(league_error_response(&e)),
        },
        None => current.name,
    };
    let group_id = request.group_id.unwrap_or(current.group_id);

    if let Err(e) = check_group(&queries, tenant_id, group_id).await {
        return Ok(league_error_response(&e));
    }

    match queries.update_team(tenant_id, team_id, &name, group_id).await {
        Ok(Some(team)) => {
            tracing::info!("Updated team {} (group {:?})", team.id, team.group_id);
            Ok(ok_response("Team updated successfully", team))
        }
        Ok(None) => Ok(league_error_response(&LeagueError::NotFound(format!("Team {}", team_id)))),
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

#[tracing::instrument(
    name = "Register player",
    skip(request, pool),
    fields(tenant_id = %tenant_id, team_id = %team_id)
)]
pub async fn register_player(
    tenant_id: Uuid,
    team_id: Uuid,
    request: web::Json<PlayerRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let validator = LeagueValidator::new();
    let name = match validator.validate_player_name(&request.name) {
        Ok(name) => name,
        Err(e) => return Ok(league_error_response(&e)),
    };
    if let Err(e) = validator.validate_shirt_number(request.shirt_number) {
        return Ok(league_error_response(&e));
    }

    let queries = TeamQueries::new(pool.get_ref().clone());
    match queries.get_team(tenant_id, team_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(league_error_response(&LeagueError::NotFound(format!("Team {}", team_id)))),
        Err(e) => return Ok(league_error_response(&LeagueError::Database(e))),
    }

    match queries.create_player(tenant_id, team_id, &name, request.shirt_number).await {
        Ok(player) => {
            tracing::info!("Registered player {} for team {}", player.id, team_id);
            Ok(created_response("Player registered successfully", player))
        }
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}

#[tracing::instrument(
    name = "List players",
    skip(pool),
    fields(tenant_id = %tenant_id, team_id = %team_id)
)]
pub async fn list_players(
    tenant_id: Uuid,
    team_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match TeamQueries::new(pool.get_ref().clone()).list_players(tenant_id, team_id).await {
        Ok(players) => Ok(ok_response("Players retrieved successfully", players)),
        Err(e) => Ok(league_error_response(&LeagueError::Database(e))),
    }
}
