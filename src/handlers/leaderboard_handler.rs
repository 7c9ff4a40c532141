use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::db::match_queries;
use crate::models::common::ApiResponse;
use crate::models::leaderboard::LeaderboardQuery;
use crate::models::match_record::MatchMode;
use crate::stats::leaderboard;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
}

/// Inclusive upper bound: the whole `to` day counts
fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_micro_opt(23, 59, 59, 999_999)
        .expect("end of day is always valid")
        .and_utc()
}

#[tracing::instrument(name = "Get leaderboard", skip(pool, query))]
pub async fn get_leaderboard(
    pool: web::Data<PgPool>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let from = query.from.map(start_of_day);
    let to = query.to.map(end_of_day);

    let mode = match query.mode.as_deref() {
        None | Some("all") => None,
        Some(raw) => match MatchMode::parse(raw) {
            Some(mode) => Some(mode),
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
                    "Unknown mode '{}', expected all, 1v1 or 2v2",
                    raw
                ))));
            }
        },
    };

    match match_queries::fetch_matches_in_range(pool.get_ref(), from, to, mode).await {
        Ok(matches) => {
            let entries = leaderboard::rank_players(&matches, limit);
            tracing::info!(
                "Leaderboard computed over {} matches, {} players returned",
                matches.len(),
                entries.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success("Leaderboard", entries)))
        }
        Err(e) => {
            tracing::error!("Failed to fetch leaderboard matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to compute leaderboard")))
        }
    }
}
