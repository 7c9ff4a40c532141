// src/routes/players.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::player_handler;

/// All player profiles, ordered by username
#[get("/players")]
async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::list_players(pool).await
}
