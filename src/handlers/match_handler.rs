use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::match_queries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::match_record::{CreateMatchRequest, SaveMatchStatsRequest};

const DEFAULT_PAGE: i64 = 10;
const MAX_PAGE: i64 = 50;

#[derive(Debug, serde::Deserialize)]
pub struct MatchPageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[tracing::instrument(name = "Create match", skip(pool, request, claims), fields(sub = %claims.sub))]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let Some(created_by) = claims.user_id() else {
        tracing::error!("Invalid user ID in claims");
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")));
    };

    if let Err(reason) = request.validate() {
        tracing::info!("Rejected match creation: {}", reason);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(reason)));
    }

    match match_queries::insert_match(pool.get_ref(), created_by, &request).await {
        Ok(record) => Ok(HttpResponse::Created().json(ApiResponse::success("Match recorded", record))),
        Err(e) => {
            tracing::error!("Failed to insert match: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to record match")))
        }
    }
}

#[tracing::instrument(name = "Get match detail", skip(pool))]
pub async fn get_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match match_queries::fetch_match(pool.get_ref(), match_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match detail", detail))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))),
        Err(e) => {
            tracing::error!("Failed to fetch match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch match")))
        }
    }
}

#[tracing::instrument(name = "Get recent matches", skip(pool, query))]
pub async fn get_recent_matches(
    pool: web::Data<PgPool>,
    query: web::Query<MatchPageQuery>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
    match match_queries::fetch_recent_matches(pool.get_ref(), limit).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success("Recent matches", matches))),
        Err(e) => {
            tracing::error!("Failed to fetch recent matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch recent matches")))
        }
    }
}

#[tracing::instrument(name = "Get own matches", skip(pool, claims, query), fields(sub = %claims.sub))]
pub async fn get_my_matches(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    query: web::Query<MatchPageQuery>,
) -> Result<HttpResponse> {
    let Some(player_id) = claims.user_id() else {
        tracing::error!("Invalid user ID in claims");
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")));
    };

    let limit = query.limit.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
    let offset = query.offset.unwrap_or(0).max(0);

    match match_queries::fetch_player_matches_page(pool.get_ref(), player_id, limit, offset).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match history", matches))),
        Err(e) => {
            tracing::error!("Failed to fetch matches for {}: {}", player_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch match history")))
        }
    }
}

#[tracing::instrument(name = "Save match stats", skip(pool, request))]
pub async fn save_match_stats(
    match_id: Uuid,
    request: web::Json<SaveMatchStatsRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match match_queries::update_match_stats(
        pool.get_ref(),
        match_id,
        &request.match_stats,
        request.stats_image_url.as_deref(),
    )
    .await
    {
        Ok(Some(record)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Match stats saved", record)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))),
        Err(e) => {
            tracing::error!("Failed to save stats for match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to save match stats")))
        }
    }
}

#[tracing::instrument(name = "Delete match stats", skip(pool))]
pub async fn delete_match_stats(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match match_queries::clear_match_stats(pool.get_ref(), match_id).await {
        Ok(Some(record)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Match stats removed", record)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))),
        Err(e) => {
            tracing::error!("Failed to clear stats for match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to remove match stats")))
        }
    }
}
