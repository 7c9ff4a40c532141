// src/routes/matches.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::match_handler;
use crate::handlers::match_handler::MatchPageQuery;
use crate::middleware::auth::Claims;
use crate::models::match_record::{CreateMatchRequest, SaveMatchStatsRequest};

/// Record a new match with its participants
#[post("/matches")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, pool, claims).await
}

/// Most recent matches across all players
#[get("/matches/recent")]
async fn get_recent_matches(
    query: web::Query<MatchPageQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::get_recent_matches(pool, query).await
}

/// The caller's own match history, paginated
#[get("/matches/mine")]
async fn get_my_matches(
    query: web::Query<MatchPageQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    match_handler::get_my_matches(pool, claims, query).await
}

/// A single match with full participant detail
#[get("/matches/{match_id}")]
async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, pool).await
}

/// Attach a performance snapshot to a match
#[put("/matches/{match_id}/stats")]
async fn save_match_stats(
    path: web::Path<Uuid>,
    request: web::Json<SaveMatchStatsRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::save_match_stats(match_id, request, pool).await
}

/// Remove a match's performance snapshot (re-upload flow)
#[delete("/matches/{match_id}/stats")]
async fn delete_match_stats(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::delete_match_stats(match_id, pool).await
}
