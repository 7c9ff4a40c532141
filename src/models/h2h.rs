use serde::{Deserialize, Serialize};

use crate::models::match_record::MatchWithParticipants;
use crate::models::profile::ProfileDisplay;

/// Head-to-head record between the requesting player and one opponent.
/// Zero shared matches is a valid result with the opponent profile
/// still populated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HeadToHeadSummary {
    pub opponent: ProfileDisplay,
    pub total_games: u32,
    pub user_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub recent_games: Vec<MatchWithParticipants>,
}
