use std::collections::HashSet;

use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{match_queries, profile_queries, StoreError};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::h2h::HeadToHeadSummary;
use crate::models::profile::ProfileDisplay;
use crate::stats::h2h;

async fn compute_h2h(
    pool: &PgPool,
    player_id: Uuid,
    opponent_id: Uuid,
) -> Result<HeadToHeadSummary, StoreError> {
    let opponent_profile = profile_queries::fetch_profile(pool, opponent_id).await?;
    let opponent = ProfileDisplay::from_optional(opponent_profile.as_ref());

    let mine = match_queries::fetch_player_participations(pool, player_id).await?;
    if mine.is_empty() {
        return Ok(h2h::head_to_head(player_id, opponent_id, opponent, &[]));
    }
    let theirs = match_queries::fetch_player_participations(pool, opponent_id).await?;

    let my_ids: HashSet<Uuid> = mine.iter().map(|p| p.match_id).collect();
    let shared_ids: Vec<Uuid> = theirs
        .iter()
        .map(|p| p.match_id)
        .filter(|id| my_ids.contains(id))
        .collect();

    let shared = match_queries::fetch_matches_with_participants(pool, &shared_ids).await?;
    Ok(h2h::head_to_head(player_id, opponent_id, opponent, &shared))
}

#[tracing::instrument(name = "Get head-to-head", skip(pool, claims), fields(sub = %claims.sub))]
pub async fn get_head_to_head(
    opponent_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let Some(player_id) = claims.user_id() else {
        tracing::error!("Invalid user ID in claims");
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")));
    };

    match compute_h2h(pool.get_ref(), player_id, opponent_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success("Head-to-head", summary))),
        Err(e) => {
            tracing::error!(
                "Failed to compute head-to-head {} vs {}: {}",
                player_id,
                opponent_id,
                e
            );
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to compute head-to-head")))
        }
    }
}
