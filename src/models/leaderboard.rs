use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::stats::{Badge, Streak};

/// One ranked row of the leaderboard. Streak and badges are computed
/// over the same filtered match set as the points, so they shift with
/// the date/mode scope.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeaderboardEntry {
    pub player_id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub games: u32,
    pub last_played_at: Option<DateTime<Utc>>,
    pub current_streak: Option<Streak>,
    pub badges: Vec<Badge>,
}

/// Query parameters accepted by the leaderboard endpoint
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub mode: Option<String>,
}
