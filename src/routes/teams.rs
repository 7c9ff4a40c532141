// src/routes/teams.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::team_handler;

/// All selectable team records, ordered by name
#[get("/teams")]
async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    team_handler::list_teams(pool).await
}
