use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::response::{created_response, league_error_response, ok_response, require_tenant};
use crate::league::league::LeagueService;
use crate::models::common::ApiResponse;
use crate::models::game::*;
use crate::models::standings::ScorersQuery;
use crate::ok_or_return;

#[tracing::instrument(
    name = "List matches",
    skip(query, pool),
    fields(tenant_id = %tenant_id, filter = %query)
)]
pub async fn list_matches(
    tenant_id: Uuid,
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let league_service = LeagueService::new(pool.get_ref().clone());
    match league_service.list_matches(tenant_id, &query).await {
        Ok(matches) => Ok(ok_response("Matches retrieved successfully", matches)),
        Err(e) => Ok(league_error_response(&e)),
    }
}

/// Record the final score of a match
#[tracing::instrument(
    name = "Update match result",
    skip(request, pool),
    fields(
        tenant_id = %tenant_id,
        match_id = %match_id,
        home_score = request.home_score,
        away_score = request.away_score
    )
)]
pub async fn update_match_result(
    tenant_id: Uuid,
    match_id: Uuid,
    request: web::Json<MatchResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service
        .update_match_result(tenant_id, match_id, request.home_score, request.away_score)
        .await
    {
        Ok(game) => {
            tracing::info!(
                "Match {} finished {}-{}",
                game.id,
                request.home_score,
                request.away_score
            );
            Ok(ok_response("Match result saved", game))
        }
        Err(e) => Ok(league_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Add match event",
    skip(request, pool),
    fields(tenant_id = %tenant_id, match_id = %match_id, kind = %request.kind)
)]
pub async fn add_match_event(
    tenant_id: Uuid,
    match_id: Uuid,
    request: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.add_event(tenant_id, match_id, &request).await {
        Ok(event) => Ok(created_response("Match event recorded", event)),
        Err(e) => Ok(league_error_response(&e)),
    }
}

pub async fn list_match_events(
    tenant_id: Uuid,
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_events(tenant_id, match_id).await {
        Ok(events) => Ok(ok_response("Match events retrieved successfully", events)),
        Err(e) => Ok(league_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Delete match event",
    skip(pool),
    fields(tenant_id = %tenant_id, match_id = %match_id, event_id = %event_id)
)]
pub async fn delete_match_event(
    tenant_id: Uuid,
    match_id: Uuid,
    event_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.delete_event(tenant_id, match_id, event_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Match event deleted"))),
        Err(e) => Ok(league_error_response(&e)),
    }
}

/// Top scorers and disciplinary table of the tenant
#[tracing::instrument(
    name = "Get scorers",
    skip(query, pool),
    fields(tenant_id = %tenant_id, limit = ?query.limit)
)]
pub async fn get_scorers(
    tenant_id: Uuid,
    query: web::Query<ScorersQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    ok_or_return!(require_tenant(pool.get_ref(), tenant_id).await);

    let league_service = LeagueService::new(pool.get_ref().clone());
    match league_service.scorers(tenant_id, query.limit).await {
        Ok(scorers) => Ok(ok_response("Scorers retrieved successfully", scorers)),
        Err(e) => Ok(league_error_response(&e)),
    }
}
