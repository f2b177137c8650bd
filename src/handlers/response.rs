use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::TenantQueries;
use crate::league::LeagueError;
use crate::models::common::ApiResponse;
use crate::models::tenant::Tenant;

/// Map a league error to its JSON response
pub fn league_error_response(error: &LeagueError) -> HttpResponse {
    match error {
        LeagueError::Validation(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        LeagueError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        LeagueError::DuplicateConflict(report) => HttpResponse::Conflict().json(
            ApiResponse::error_with_data(
                "Some fixtures already exist. Confirm to save them anyway.",
                report,
            ),
        ),
        LeagueError::NoFixturesGenerated => {
            HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error(error.to_string()))
        }
        LeagueError::Persistence { saved, .. } => {
            tracing::error!("{}", error);
            HttpResponse::InternalServerError().json(ApiResponse::error_with_data(
                "Failed to save fixtures",
                json!({ "saved": saved }),
            ))
        }
        LeagueError::Database(e) => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}

pub fn ok_response<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(message, data))
}

pub fn created_response<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::success(message, data))
}

/// The tenant every scoped route works in, or the response to return instead
pub async fn require_tenant(pool: &PgPool, tenant_id: Uuid) -> Result<Tenant, HttpResponse> {
    match TenantQueries::new(pool.clone()).get_tenant(tenant_id).await {
        Ok(Some(tenant)) => Ok(tenant),
        Ok(None) => Err(league_error_response(&LeagueError::NotFound(format!("Tenant {}", tenant_id)))),
        Err(e) => Err(league_error_response(&LeagueError::Database(e))),
    }
}

/// Macro for handlers returning `Result<HttpResponse>`.
/// Returns `Ok(response)` early when the expression is an `Err(response)`.
#[macro_export]
macro_rules! ok_or_return {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(response) => return Ok(response),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use serde_json::Value;

    use crate::models::fixture::DuplicateReport;

    async fn json_body(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_is_bad_request() {
        let response = league_error_response(&LeagueError::validation("Group name cannot be empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Group name cannot be empty");
    }

    #[actix_web::test]
    async fn test_not_found() {
        let response = league_error_response(&LeagueError::NotFound("Group 42".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Group 42 not found");
    }

    #[actix_web::test]
    async fn test_duplicate_conflict_carries_report() {
        let report = DuplicateReport {
            existing: 2,
            new: 4,
            total: 6,
            conflicting: vec![0, 3],
        };
        let response = league_error_response(&LeagueError::DuplicateConflict(report));
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"]["existing"], 2);
        assert_eq!(body["data"]["new"], 4);
        assert_eq!(body["data"]["total"], 6);
        assert_eq!(body["data"]["conflicting"], json!([0, 3]));
    }

    #[actix_web::test]
    async fn test_no_fixtures_is_unprocessable() {
        let response = league_error_response(&LeagueError::NoFixturesGenerated);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_persistence_reports_saved_count() {
        let error = LeagueError::Persistence {
            saved: 3,
            source: sqlx::Error::PoolTimedOut,
        };
        let response = league_error_response(&error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Failed to save fixtures");
        assert_eq!(body["data"]["saved"], 3);
    }

    #[actix_web::test]
    async fn test_database_error_is_generic() {
        let response = league_error_response(&LeagueError::Database(sqlx::Error::RowNotFound));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_success_envelopes() {
        let response = created_response("Group created successfully", json!({ "id": 1 }));
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);

        let response = ok_response("Groups retrieved successfully", Vec::<u8>::new());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["data"], json!([]));
    }
}
