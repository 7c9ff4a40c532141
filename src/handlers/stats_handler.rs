use std::collections::HashMap;

use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{match_queries, team_queries, StoreError};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::stats::PlayerStatsData;
use crate::stats::aggregate;

/// Fetch the player's history snapshot and fold it into the stats
/// projection. Absence of history is a valid state: the empty
/// projection comes back, never an error.
async fn compute_stats_for(pool: &PgPool, player_id: Uuid) -> Result<PlayerStatsData, StoreError> {
    let participations = match_queries::fetch_player_participations(pool, player_id).await?;
    if participations.is_empty() {
        return Ok(aggregate::compute_player_stats(player_id, &[], &HashMap::new()));
    }

    let match_ids: Vec<Uuid> = participations.iter().map(|p| p.match_id).collect();
    let matches = match_queries::fetch_matches_with_participants(pool, &match_ids).await?;

    let team_refs: Vec<String> = participations
        .iter()
        .filter_map(|p| p.team_ref.clone())
        .collect();
    let teams = team_queries::fetch_teams_by_refs(pool, &team_refs).await?;

    Ok(aggregate::compute_player_stats(player_id, &matches, &teams))
}

#[tracing::instrument(name = "Get player stats", skip(pool))]
pub async fn get_player_stats(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match compute_stats_for(pool.get_ref(), player_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success("Player stats", stats))),
        Err(e) => {
            tracing::error!("Failed to compute stats for {}: {}", player_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to compute player stats")))
        }
    }
}

#[tracing::instrument(name = "Get own stats", skip(pool, claims), fields(sub = %claims.sub))]
pub async fn get_own_stats(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let Some(player_id) = claims.user_id() else {
        tracing::error!("Invalid user ID in claims");
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")));
    };
    get_player_stats(player_id, pool).await
}
