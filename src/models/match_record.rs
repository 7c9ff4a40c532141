use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Game mode: singles or doubles
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "2v2")]
    TwoVsTwo,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::OneVsOne => "1v1",
            MatchMode::TwoVsTwo => "2v2",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1v1" => Some(MatchMode::OneVsOne),
            "2v2" => Some(MatchMode::TwoVsTwo),
            _ => None,
        }
    }

    /// Required participant count per side
    pub fn players_per_side(&self) -> usize {
        match self {
            MatchMode::OneVsOne => 1,
            MatchMode::TwoVsTwo => 2,
        }
    }
}

/// Which side of the table a participant played on
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(TeamSide::Home),
            "away" => Some(TeamSide::Away),
            _ => None,
        }
    }
}

/// Period in which a goal fell / a result was decided
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPeriod {
    #[default]
    Regular,
    ExtraTime,
    Penalty,
}

/// One cumulative step of the goal-by-goal timeline
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub home: i32,
    pub away: i32,
    #[serde(default)]
    pub period: MatchPeriod,
}

/// Home/away split of a single numeric performance figure.
/// Every field of the snapshot is optional: screens differ in what
/// they show and absent values are tolerated throughout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct SideSplit {
    pub home: Option<f64>,
    pub away: Option<f64>,
}

impl SideSplit {
    pub fn of(home: f64, away: f64) -> Self {
        Self {
            home: Some(home),
            away: Some(away),
        }
    }

    pub fn side(&self, side: TeamSide) -> Option<f64> {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }
}

/// Stat fields arrive missing or as explicit nulls depending on what
/// the screen showed; both degrade to the empty split.
fn null_as_default<'de, D>(deserializer: D) -> Result<SideSplit, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<SideSplit>::deserialize(deserializer)?.unwrap_or_default())
}

/// Performance statistics snapshot attached to a match
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PerformanceStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub possession: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ball_recovery_time: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shots: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub xg: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub passes: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duels: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duels_won: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interceptions: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saves: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fouls: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offsides: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub corners: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub free_kicks: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub penalties: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub yellow_cards: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dribbling: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shot_accuracy: SideSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pass_accuracy: SideSplit,
}

/// A recorded match as fetched from the match record store
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchRecord {
    pub id: Uuid,
    pub mode: MatchMode,
    pub score_home: i32,
    pub score_away: i32,
    pub played_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub result_type: MatchPeriod,
    pub score_timeline: Option<Vec<TimelineEntry>>,
    pub match_stats: Option<PerformanceStats>,
    pub report: Option<String>,
    pub stats_image_url: Option<String>,
}

impl MatchRecord {
    /// Goals scored by the given side
    pub fn goals_for(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Home => self.score_home,
            TeamSide::Away => self.score_away,
        }
    }

    /// Goals conceded by the given side
    pub fn goals_against(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Home => self.score_away,
            TeamSide::Away => self.score_home,
        }
    }
}

/// One player's membership in one match, with joined profile display data
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchParticipant {
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub side: TeamSide,
    pub team_ref: Option<String>,
    pub rating: Option<i32>,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// A match together with all of its participant rows
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchWithParticipants {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub players: Vec<MatchParticipant>,
}

impl MatchWithParticipants {
    /// The side the given player played on, if they took part
    pub fn side_of(&self, player_id: Uuid) -> Option<TeamSide> {
        self.players
            .iter()
            .find(|p| p.player_id == player_id)
            .map(|p| p.side)
    }

    /// The participant row for the given player, if present
    pub fn participant(&self, player_id: Uuid) -> Option<&MatchParticipant> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}

/// One player entry inside a match creation request
#[derive(Debug, Deserialize, Clone)]
pub struct CreateMatchPlayer {
    pub id: Uuid,
    pub team: TeamSide,
    pub team_name: Option<String>,
    pub rating: Option<i32>,
}

/// Request body for recording a new match
#[derive(Debug, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub mode: MatchMode,
    pub score_home: i32,
    pub score_away: i32,
    pub players: Vec<CreateMatchPlayer>,
    pub played_at: Option<DateTime<Utc>>,
    pub score_timeline: Option<Vec<TimelineEntry>>,
    pub result_type: Option<MatchPeriod>,
}

impl CreateMatchRequest {
    /// Validate the request against the match invariants: non-negative
    /// scores, exact participant counts per side, 1-5 ratings, and a
    /// timeline that is cumulative and ends on the final score.
    pub fn validate(&self) -> Result<(), String> {
        if self.score_home < 0 || self.score_away < 0 {
            return Err("Scores must be non-negative".into());
        }

        let per_side = self.mode.players_per_side();
        let home = self.players.iter().filter(|p| p.team == TeamSide::Home).count();
        let away = self.players.iter().filter(|p| p.team == TeamSide::Away).count();
        if home != per_side || away != per_side {
            return Err(format!(
                "A {} match needs exactly {} player(s) per side",
                self.mode.as_str(),
                per_side
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for player in &self.players {
            if !seen.insert(player.id) {
                return Err("A player cannot appear twice in one match".into());
            }
            if let Some(rating) = player.rating {
                if !(1..=5).contains(&rating) {
                    return Err("Player rating must be between 1 and 5".into());
                }
            }
        }

        if let Some(timeline) = &self.score_timeline {
            let mut prev = TimelineEntry {
                home: 0,
                away: 0,
                period: MatchPeriod::Regular,
            };
            for entry in timeline {
                if entry.home < 0 || entry.away < 0 {
                    return Err("Timeline entries must be non-negative".into());
                }
                if entry.home < prev.home || entry.away < prev.away {
                    return Err("Score timeline must be non-decreasing".into());
                }
                prev = *entry;
            }
            if let Some(last) = timeline.last() {
                if last.home != self.score_home || last.away != self.score_away {
                    return Err("Score timeline must end on the final score".into());
                }
            }
        }

        Ok(())
    }
}

/// Request body for attaching a performance snapshot to a match
#[derive(Debug, Deserialize, Clone)]
pub struct SaveMatchStatsRequest {
    pub match_stats: PerformanceStats,
    pub stats_image_url: Option<String>,
}
