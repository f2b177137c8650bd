// src/routes/league.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::FixtureDefaults;
use crate::handlers::league::{fixture_handler, group_handler, match_handler, team_handler};
use crate::models::fixture::{CheckFixturesRequest, CommitFixturesRequest, GenerateFixturesRequest};
use crate::models::game::{CreateMatchEventRequest, MatchListQuery, MatchResultRequest};
use crate::models::standings::ScorersQuery;
use crate::models::team::*;

/// Create a group inside a tenant
#[post("/{tenant_id}/groups")]
pub async fn create_group(
    path: web::Path<Uuid>,
    request: web::Json<CreateGroupRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    group_handler::create_group(tenant_id, request, pool).await
}

/// List groups with their team counts
#[get("/{tenant_id}/groups")]
pub async fn list_groups(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    group_handler::list_groups(tenant_id, pool).await
}

/// Get group standings
#[get("/{tenant_id}/groups/{group_id}/standings")]
pub async fn get_group_standings(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, group_id) = path.into_inner();
    group_handler::get_group_standings(tenant_id, group_id, pool).await
}

/// Register a new team
#[post("/{tenant_id}/teams")]
pub async fn register_team(
    path: web::Path<Uuid>,
    request: web::Json<TeamRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    team_handler::register_team(tenant_id, request, pool).await
}

/// Get all teams, optionally of one group
#[get("/{tenant_id}/teams")]
pub async fn list_teams(
    path: web::Path<Uuid>,
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    team_handler::list_teams(tenant_id, query, pool).await
}

/// Update team information
#[put("/{tenant_id}/teams/{team_id}")]
pub async fn update_team(
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<TeamUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, team_id) = path.into_inner();
    team_handler::update_team(tenant_id, team_id, request, pool).await
}

#[post("/{tenant_id}/teams/{team_id}/players")]
pub async fn register_player(
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<PlayerRegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, team_id) = path.into_inner();
    team_handler::register_player(tenant_id, team_id, request, pool).await
}

#[get("/{tenant_id}/teams/{team_id}/players")]
pub async fn list_players(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, team_id) = path.into_inner();
    team_handler::list_players(tenant_id, team_id, pool).await
}

/// Generate a fixture preview for the selected groups
#[post("/{tenant_id}/fixtures/generate")]
pub async fn generate_fixtures(
    path: web::Path<Uuid>,
    request: web::Json<GenerateFixturesRequest>,
    pool: web::Data<PgPool>,
    defaults: web::Data<FixtureDefaults>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    fixture_handler::generate_fixtures(tenant_id, request, pool, defaults).await
}

#[post("/{tenant_id}/fixtures/check")]
pub async fn check_fixtures(
    path: web::Path<Uuid>,
    request: web::Json<CheckFixturesRequest>,
    pool: web::Data<PgPool>,
    defaults: web::Data<FixtureDefaults>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    fixture_handler::check_fixtures(tenant_id, request, pool, defaults).await
}

/// Save a confirmed fixture list as matches
#[post("/{tenant_id}/fixtures/commit")]
pub async fn commit_fixtures(
    path: web::Path<Uuid>,
    request: web::Json<CommitFixturesRequest>,
    pool: web::Data<PgPool>,
    defaults: web::Data<FixtureDefaults>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    fixture_handler::commit_fixtures(tenant_id, request, pool, defaults).await
}

#[get("/{tenant_id}/matches")]
pub async fn list_matches(
    path: web::Path<Uuid>,
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    match_handler::list_matches(tenant_id, query, pool).await
}

/// Update match result
#[put("/{tenant_id}/matches/{match_id}/result")]
pub async fn update_match_result(
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<MatchResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, match_id) = path.into_inner();
    match_handler::update_match_result(tenant_id, match_id, request, pool).await
}

#[post("/{tenant_id}/matches/{match_id}/events")]
pub async fn add_match_event(
    path: web::Path<(Uuid, Uuid)>,
    request: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, match_id) = path.into_inner();
    match_handler::add_match_event(tenant_id, match_id, request, pool).await
}

#[get("/{tenant_id}/matches/{match_id}/events")]
pub async fn list_match_events(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, match_id) = path.into_inner();
    match_handler::list_match_events(tenant_id, match_id, pool).await
}

#[delete("/{tenant_id}/matches/{match_id}/events/{event_id}")]
pub async fn delete_match_event(
    path: web::Path<(Uuid, Uuid, Uuid)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let (tenant_id, match_id, event_id) = path.into_inner();
    match_handler::delete_match_event(tenant_id, match_id, event_id, pool).await
}

/// Top scorers and cards across the tenant
#[get("/{tenant_id}/scorers")]
pub async fn get_scorers(
    path: web::Path<Uuid>,
    query: web::Query<ScorersQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tenant_id = path.into_inner();
    match_handler::get_scorers(tenant_id, query, pool).await
}
