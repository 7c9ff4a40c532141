// src/routes/leaderboard.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::leaderboard_handler;
use crate::models::leaderboard::LeaderboardQuery;

/// Points-based ranking over an optional date range and mode filter
#[get("/leaderboard")]
async fn get_leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    leaderboard_handler::get_leaderboard(pool, query).await
}
