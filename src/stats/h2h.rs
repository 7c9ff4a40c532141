use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::h2h::HeadToHeadSummary;
use crate::models::match_record::MatchWithParticipants;
use crate::models::profile::ProfileDisplay;
use crate::stats::classify::classify;

/// How many shared matches the summary lists in detail
const RECENT_GAMES: usize = 5;

/// Restrict aggregation to the matches shared by exactly two players.
///
/// Shared matches where the two sit on the same side are excluded by a
/// defensive filter rather than assumed absent. Classification is from
/// the requesting player's perspective. Zero shared matches yields the
/// all-zero summary with the opponent profile still populated.
pub fn head_to_head(
    player_id: Uuid,
    opponent_id: Uuid,
    opponent: ProfileDisplay,
    shared: &[MatchWithParticipants],
) -> HeadToHeadSummary {
    let mut games: Vec<&MatchWithParticipants> = shared
        .iter()
        .filter(|m| match (m.side_of(player_id), m.side_of(opponent_id)) {
            (Some(mine), Some(theirs)) => mine != theirs,
            _ => false,
        })
        .collect();
    games.sort_by(|a, b| b.record.played_at.cmp(&a.record.played_at));

    let mut user_wins = 0u32;
    let mut opponent_wins = 0u32;
    let mut draws = 0u32;

    for m in &games {
        // side_of is Some for every game that survived the filter
        let Some(side) = m.side_of(player_id) else {
            continue;
        };
        match classify(m.record.score_home, m.record.score_away, side) {
            MatchResult::Win => user_wins += 1,
            MatchResult::Loss => opponent_wins += 1,
            MatchResult::Draw => draws += 1,
        }
    }

    HeadToHeadSummary {
        opponent,
        total_games: games.len() as u32,
        user_wins,
        opponent_wins,
        draws,
        recent_games: games
            .into_iter()
            .take(RECENT_GAMES)
            .cloned()
            .collect(),
    }
}
