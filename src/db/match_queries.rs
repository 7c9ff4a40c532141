use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::match_record::{
    CreateMatchRequest, MatchMode, MatchParticipant, MatchPeriod, MatchRecord,
    MatchWithParticipants, PerformanceStats, TeamSide,
};

const MATCH_COLUMNS: &str = "id, mode, score_home, score_away, played_at, created_by, \
     result_type, score_timeline, match_stats, report, stats_image_url";

/// Raw match row as stored; converted to the typed model at this
/// boundary so nothing malformed reaches the stats engine.
#[derive(Debug, sqlx::FromRow)]
struct MatchRow {
    id: Uuid,
    mode: String,
    score_home: i32,
    score_away: i32,
    played_at: DateTime<Utc>,
    created_by: Uuid,
    result_type: String,
    score_timeline: Option<serde_json::Value>,
    match_stats: Option<serde_json::Value>,
    report: Option<String>,
    stats_image_url: Option<String>,
}

impl MatchRow {
    /// Rows with an unknown mode are dropped (logged); malformed
    /// timeline or stats payloads degrade to absent rather than
    /// failing the whole computation.
    fn into_record(self) -> Option<MatchRecord> {
        let Some(mode) = MatchMode::parse(&self.mode) else {
            tracing::warn!("Skipping match {} with unknown mode '{}'", self.id, self.mode);
            return None;
        };
        let result_type = match self.result_type.as_str() {
            "extra_time" => MatchPeriod::ExtraTime,
            "penalty" => MatchPeriod::Penalty,
            _ => MatchPeriod::Regular,
        };
        let score_timeline = self.score_timeline.and_then(|v| {
            serde_json::from_value(v)
                .map_err(|e| tracing::debug!("Dropping malformed timeline on {}: {}", self.id, e))
                .ok()
        });
        let match_stats = self.match_stats.and_then(|v| {
            serde_json::from_value::<PerformanceStats>(v)
                .map_err(|e| tracing::debug!("Dropping malformed stats on {}: {}", self.id, e))
                .ok()
        });
        Some(MatchRecord {
            id: self.id,
            mode,
            score_home: self.score_home,
            score_away: self.score_away,
            played_at: self.played_at,
            created_by: self.created_by,
            result_type,
            score_timeline,
            match_stats,
            report: self.report,
            stats_image_url: self.stats_image_url,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ParticipantRow {
    game_id: Uuid,
    player_id: Uuid,
    team: String,
    team_name: Option<String>,
    rating: Option<i32>,
    username: Option<String>,
    avatar_url: Option<String>,
}

impl ParticipantRow {
    fn into_participant(self) -> Option<MatchParticipant> {
        let side = TeamSide::parse(&self.team)?;
        Some(MatchParticipant {
            match_id: self.game_id,
            player_id: self.player_id,
            side,
            team_ref: self.team_name,
            rating: self.rating,
            username: self.username.unwrap_or_else(|| "Unknown".to_string()),
            avatar_url: self.avatar_url,
        })
    }
}

/// One row of a player's match membership
#[derive(Debug, Clone)]
pub struct Participation {
    pub match_id: Uuid,
    pub side: TeamSide,
    pub team_ref: Option<String>,
}

/// All participant rows for a given player
#[tracing::instrument(name = "Fetch player participations", skip(pool))]
pub async fn fetch_player_participations(
    pool: &PgPool,
    player_id: Uuid,
) -> Result<Vec<Participation>, StoreError> {
    let rows = sqlx::query_as::<_, (Uuid, String, Option<String>)>(
        "SELECT game_id, team, team_name FROM game_players WHERE player_id = $1",
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(game_id, team, team_name)| {
            TeamSide::parse(&team).map(|side| Participation {
                match_id: game_id,
                side,
                team_ref: team_name,
            })
        })
        .collect())
}

async fn attach_participants(
    pool: &PgPool,
    rows: Vec<MatchRow>,
) -> Result<Vec<MatchWithParticipants>, StoreError> {
    let records: Vec<MatchRecord> = rows.into_iter().filter_map(MatchRow::into_record).collect();
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = records.iter().map(|r| r.id).collect();
    let participant_rows = sqlx::query_as::<_, ParticipantRow>(
        "SELECT gp.game_id, gp.player_id, gp.team, gp.team_name, gp.rating, \
                p.username, p.avatar_url \
         FROM game_players gp \
         LEFT JOIN profiles p ON p.id = gp.player_id \
         WHERE gp.game_id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    let mut by_match: HashMap<Uuid, Vec<MatchParticipant>> = HashMap::new();
    for row in participant_rows {
        if let Some(participant) = row.into_participant() {
            by_match
                .entry(participant.match_id)
                .or_default()
                .push(participant);
        }
    }

    Ok(records
        .into_iter()
        .map(|record| {
            let players = by_match.remove(&record.id).unwrap_or_default();
            MatchWithParticipants { record, players }
        })
        .collect())
}

/// Fetch the given matches with nested participant and profile detail
#[tracing::instrument(name = "Fetch matches with participants", skip(pool, match_ids), fields(count = match_ids.len()))]
pub async fn fetch_matches_with_participants(
    pool: &PgPool,
    match_ids: &[Uuid],
) -> Result<Vec<MatchWithParticipants>, StoreError> {
    if match_ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows = sqlx::query_as::<_, MatchRow>(&format!(
        "SELECT {MATCH_COLUMNS} FROM games WHERE id = ANY($1)"
    ))
    .bind(match_ids.to_vec())
    .fetch_all(pool)
    .await?;

    attach_participants(pool, rows).await
}

/// Fetch every match inside the optional inclusive date range,
/// optionally restricted to one mode. Feeds the leaderboard.
#[tracing::instrument(name = "Fetch matches in range", skip(pool))]
pub async fn fetch_matches_in_range(
    pool: &PgPool,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    mode: Option<MatchMode>,
) -> Result<Vec<MatchWithParticipants>, StoreError> {
    let rows = sqlx::query_as::<_, MatchRow>(&format!(
        "SELECT {MATCH_COLUMNS} FROM games \
         WHERE ($1::timestamptz IS NULL OR played_at >= $1) \
           AND ($2::timestamptz IS NULL OR played_at <= $2) \
           AND ($3::text IS NULL OR mode = $3)"
    ))
    .bind(from)
    .bind(to)
    .bind(mode.map(|m| m.as_str()))
    .fetch_all(pool)
    .await?;

    attach_participants(pool, rows).await
}

/// Most recent matches globally, newest first (activity feed)
#[tracing::instrument(name = "Fetch recent matches", skip(pool))]
pub async fn fetch_recent_matches(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<MatchWithParticipants>, StoreError> {
    let rows = sqlx::query_as::<_, MatchRow>(&format!(
        "SELECT {MATCH_COLUMNS} FROM games ORDER BY played_at DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    attach_participants(pool, rows).await
}

/// One page of a player's match history, newest first
#[tracing::instrument(name = "Fetch player match page", skip(pool))]
pub async fn fetch_player_matches_page(
    pool: &PgPool,
    player_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<MatchWithParticipants>, StoreError> {
    let rows = sqlx::query_as::<_, MatchRow>(&format!(
        "SELECT {MATCH_COLUMNS} FROM games g \
         WHERE EXISTS (SELECT 1 FROM game_players gp WHERE gp.game_id = g.id AND gp.player_id = $1) \
         ORDER BY played_at DESC LIMIT $2 OFFSET $3"
    ))
    .bind(player_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    attach_participants(pool, rows).await
}

/// A single match with participants, if it exists
#[tracing::instrument(name = "Fetch match", skip(pool))]
pub async fn fetch_match(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<MatchWithParticipants>, StoreError> {
    let row = sqlx::query_as::<_, MatchRow>(&format!(
        "SELECT {MATCH_COLUMNS} FROM games WHERE id = $1"
    ))
    .bind(match_id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    Ok(attach_participants(pool, vec![row]).await?.into_iter().next())
}

/// Insert a match and its participant rows in one transaction
#[tracing::instrument(name = "Insert match", skip(pool, request), fields(mode = request.mode.as_str()))]
pub async fn insert_match(
    pool: &PgPool,
    created_by: Uuid,
    request: &CreateMatchRequest,
) -> Result<MatchRecord, StoreError> {
    let match_id = Uuid::new_v4();
    let played_at = request.played_at.unwrap_or_else(Utc::now);
    let result_type = request.result_type.unwrap_or_default();
    let result_type_str = match result_type {
        MatchPeriod::Regular => "regular",
        MatchPeriod::ExtraTime => "extra_time",
        MatchPeriod::Penalty => "penalty",
    };
    let timeline_json = request
        .score_timeline
        .as_ref()
        .and_then(|t| serde_json::to_value(t).ok());

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO games (id, mode, score_home, score_away, played_at, created_by, result_type, score_timeline) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(match_id)
    .bind(request.mode.as_str())
    .bind(request.score_home)
    .bind(request.score_away)
    .bind(played_at)
    .bind(created_by)
    .bind(result_type_str)
    .bind(timeline_json)
    .execute(&mut *tx)
    .await?;

    for player in &request.players {
        sqlx::query(
            "INSERT INTO game_players (game_id, player_id, team, team_name, rating) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(match_id)
        .bind(player.id)
        .bind(player.team.as_str())
        .bind(player.team_name.as_deref())
        .bind(player.rating)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!("Recorded match {} ({})", match_id, request.mode.as_str());

    Ok(MatchRecord {
        id: match_id,
        mode: request.mode,
        score_home: request.score_home,
        score_away: request.score_away,
        played_at,
        created_by,
        result_type,
        score_timeline: request.score_timeline.clone(),
        match_stats: None,
        report: None,
        stats_image_url: None,
    })
}

/// Attach a performance snapshot and evidence image to a match
#[tracing::instrument(name = "Save match stats", skip(pool, stats))]
pub async fn update_match_stats(
    pool: &PgPool,
    match_id: Uuid,
    stats: &PerformanceStats,
    stats_image_url: Option<&str>,
) -> Result<Option<MatchRecord>, StoreError> {
    let stats_json = serde_json::to_value(stats).unwrap_or(serde_json::Value::Null);
    let row = sqlx::query_as::<_, MatchRow>(&format!(
        "UPDATE games SET match_stats = $2, stats_image_url = $3 WHERE id = $1 \
         RETURNING {MATCH_COLUMNS}"
    ))
    .bind(match_id)
    .bind(stats_json)
    .bind(stats_image_url)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(MatchRow::into_record))
}

/// Remove a match's performance snapshot (re-upload flow)
#[tracing::instrument(name = "Clear match stats", skip(pool))]
pub async fn clear_match_stats(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<MatchRecord>, StoreError> {
    let row = sqlx::query_as::<_, MatchRow>(&format!(
        "UPDATE games SET match_stats = NULL, stats_image_url = NULL WHERE id = $1 \
         RETURNING {MATCH_COLUMNS}"
    ))
    .bind(match_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(MatchRow::into_record))
}
