use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::profile_queries;
use crate::models::common::ApiResponse;

#[tracing::instrument(name = "List players", skip(pool))]
pub async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match profile_queries::fetch_all_profiles(pool.get_ref()).await {
        Ok(players) => Ok(HttpResponse::Ok().json(ApiResponse::success("Players", players))),
        Err(e) => {
            tracing::error!("Failed to fetch players: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch players")))
        }
    }
}
