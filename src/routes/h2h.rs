// src/routes/h2h.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::h2h_handler;
use crate::middleware::auth::Claims;

/// Head-to-head record between the caller and one opponent
#[get("/h2h/{opponent_id}")]
async fn get_head_to_head(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let opponent_id = path.into_inner();
    h2h_handler::get_head_to_head(opponent_id, pool, claims).await
}
