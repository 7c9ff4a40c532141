use crate::models::common::MatchResult;
use crate::models::match_record::TeamSide;

/// Derive win/loss/draw for one side of a final score.
/// Pure and total: equal scores are a draw regardless of side.
pub fn classify(score_home: i32, score_away: i32, side: TeamSide) -> MatchResult {
    if score_home == score_away {
        return MatchResult::Draw;
    }
    let home_won = score_home > score_away;
    match side {
        TeamSide::Home if home_won => MatchResult::Win,
        TeamSide::Home => MatchResult::Loss,
        TeamSide::Away if !home_won => MatchResult::Win,
        TeamSide::Away => MatchResult::Loss,
    }
}
