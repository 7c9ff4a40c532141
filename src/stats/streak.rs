use chrono::{DateTime, Utc};

use crate::models::common::MatchResult;
use crate::models::stats::Streak;

/// A classified result at a point in time, the streak calculator's input
#[derive(Debug, Clone, Copy)]
pub struct ResultAt {
    pub played_at: DateTime<Utc>,
    pub result: MatchResult,
}

/// Current streak: scan from the most recent result backwards. Leading
/// draws are skipped without starting a streak; the first non-draw
/// result fixes the streak type; later draws are skipped without
/// breaking the run; the opposite type terminates the scan.
///
/// A run of 0 or 1 is not reported — two consecutive results is the
/// threshold for a streak.
pub fn current_streak(results: &[ResultAt]) -> Option<Streak> {
    let mut sorted: Vec<&ResultAt> = results.iter().collect();
    sorted.sort_by(|a, b| b.played_at.cmp(&a.played_at));

    let mut streak_type: Option<MatchResult> = None;
    let mut count = 0u32;

    for entry in sorted {
        match (streak_type, entry.result) {
            (_, MatchResult::Draw) => continue,
            (None, result) => {
                streak_type = Some(result);
                count = 1;
            }
            (Some(current), result) if result == current => count += 1,
            (Some(_), _) => break,
        }
    }

    match streak_type {
        Some(streak_type) if count >= 2 => Some(Streak { streak_type, count }),
        _ => None,
    }
}

/// Historic maximum win run over the full history, in chronological
/// order. Draws do not break a run; losses reset it.
pub fn longest_win_run(results: &[ResultAt]) -> u32 {
    let mut sorted: Vec<&ResultAt> = results.iter().collect();
    sorted.sort_by(|a, b| a.played_at.cmp(&b.played_at));

    let mut best = 0u32;
    let mut run = 0u32;
    for entry in sorted {
        match entry.result {
            MatchResult::Win => {
                run += 1;
                best = best.max(run);
            }
            MatchResult::Draw => {}
            MatchResult::Loss => run = 0,
        }
    }
    best
}
