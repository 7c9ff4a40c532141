// src/routes/stats.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::stats_handler;
use crate::middleware::auth::Claims;

/// Stats for the authenticated player
#[get("/stats")]
async fn get_own_stats(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    stats_handler::get_own_stats(pool, claims).await
}

/// Stats for any player
#[get("/stats/{player_id}")]
async fn get_player_stats(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    stats_handler::get_player_stats(player_id, pool).await
}
