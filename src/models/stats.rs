use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::MatchResult;

/// Win/loss tally for a single game mode (draws tracked globally only)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeRecord {
    pub wins: u32,
    pub losses: u32,
}

/// Another player the user shares history with (opponent or teammate)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FellowPlayer {
    pub username: String,
    pub avatar_url: Option<String>,
    pub games: u32,
}

/// Most-used club, resolved against the team records
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FavoriteTeam {
    pub name: String,
    pub short_name: Option<String>,
    pub games: u32,
}

/// Career averages over matches that carry a performance snapshot
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CareerMatchStats {
    pub games_with_stats: u32,
    pub avg_possession: i32,
    pub avg_pass_accuracy: i32,
    pub avg_dribbling: i32,
    pub avg_shot_accuracy: i32,
    pub avg_xg_per_game: Option<f64>,
    pub total_xg: f64,
    pub xg_efficiency: Option<f64>,
    pub avg_duels_won_rate: Option<i32>,
}

/// A run of at least two same-type results, draws skipped but not breaking
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    #[serde(rename = "type")]
    pub streak_type: MatchResult,
    pub count: u32,
}

/// The fixed achievement catalog, in display order
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    TikiTaka,
    BallMagnet,
    KonterKing,
    XgKiller,
    DuellMonster,
    Perfektionist,
    Schuetzenfest,
    CleanSheet,
    DavidVsGoliath,
    FairPlay,
    Debuetant,
    Stammspieler,
    Klublegende,
    Torjaeger50,
    Seriensieger,
}

impl BadgeKind {
    pub const CATALOG: [BadgeKind; 15] = [
        BadgeKind::TikiTaka,
        BadgeKind::BallMagnet,
        BadgeKind::KonterKing,
        BadgeKind::XgKiller,
        BadgeKind::DuellMonster,
        BadgeKind::Perfektionist,
        BadgeKind::Schuetzenfest,
        BadgeKind::CleanSheet,
        BadgeKind::DavidVsGoliath,
        BadgeKind::FairPlay,
        BadgeKind::Debuetant,
        BadgeKind::Stammspieler,
        BadgeKind::Klublegende,
        BadgeKind::Torjaeger50,
        BadgeKind::Seriensieger,
    ];

    /// Display emoji shipped alongside each badge
    pub fn emoji(&self) -> &'static str {
        match self {
            BadgeKind::TikiTaka => "🎯",
            BadgeKind::BallMagnet => "🧲",
            BadgeKind::KonterKing => "⚡",
            BadgeKind::XgKiller => "🎯",
            BadgeKind::DuellMonster => "💪",
            BadgeKind::Perfektionist => "✨",
            BadgeKind::Schuetzenfest => "🎆",
            BadgeKind::CleanSheet => "🧤",
            BadgeKind::DavidVsGoliath => "🪨",
            BadgeKind::FairPlay => "🤝",
            BadgeKind::Debuetant => "🐣",
            BadgeKind::Stammspieler => "📅",
            BadgeKind::Klublegende => "🏛️",
            BadgeKind::Torjaeger50 => "⚽",
            BadgeKind::Seriensieger => "🔥",
        }
    }
}

/// A single evaluated achievement
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Badge {
    #[serde(rename = "type")]
    pub kind: BadgeKind,
    pub emoji: String,
    pub unlocked: bool,
}

impl Badge {
    pub fn new(kind: BadgeKind, unlocked: bool) -> Self {
        Self {
            kind,
            emoji: kind.emoji().to_string(),
            unlocked,
        }
    }
}

/// Full stats projection for one player. Computed fresh on every
/// request from the match history; never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerStatsData {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_rate: i32,
    pub bilanz_1v1: ModeRecord,
    pub bilanz_2v2: ModeRecord,
    pub favorite_opponent: Option<FellowPlayer>,
    pub best_teammate: Option<FellowPlayer>,
    pub favorite_team: Option<FavoriteTeam>,
    pub current_streak: Option<Streak>,
    pub last_played_at: Option<DateTime<Utc>>,
    pub career_match_stats: Option<CareerMatchStats>,
    pub badges: Vec<Badge>,
}
