use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::team_queries;
use crate::models::common::ApiResponse;

#[tracing::instrument(name = "List teams", skip(pool))]
pub async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match team_queries::fetch_all_teams(pool.get_ref()).await {
        Ok(teams) => Ok(HttpResponse::Ok().json(ApiResponse::success("Teams", teams))),
        Err(e) => {
            tracing::error!("Failed to fetch teams: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch teams")))
        }
    }
}
