use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::match_record::MatchWithParticipants;
use crate::stats::aggregate::MatchFacts;
use crate::stats::badges;
use crate::stats::classify::classify;
use crate::stats::streak::{self, ResultAt};

struct Tally {
    username: String,
    avatar_url: Option<String>,
    points: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    games: u32,
    last_played_at: Option<DateTime<Utc>>,
    facts: Vec<MatchFacts>,
}

/// Build the points-based ranking across every player appearing in the
/// given (already date/mode-filtered) match set. Win = 3, draw = 1,
/// loss = 0. Streaks and badges are evaluated over the same filtered
/// set, so the ranking is scope-sensitive by design.
///
/// Sorted by points descending, then wins descending, then player id
/// ascending as a deterministic tie-break; truncated to `limit` only
/// after sorting.
pub fn rank_players(matches: &[MatchWithParticipants], limit: usize) -> Vec<LeaderboardEntry> {
    let mut tallies: HashMap<Uuid, Tally> = HashMap::new();

    for m in matches {
        for participant in &m.players {
            let tally = tallies
                .entry(participant.player_id)
                .or_insert_with(|| Tally {
                    username: participant.username.clone(),
                    avatar_url: participant.avatar_url.clone(),
                    points: 0,
                    wins: 0,
                    draws: 0,
                    losses: 0,
                    games: 0,
                    last_played_at: None,
                    facts: Vec::new(),
                });

            tally.games += 1;
            if tally
                .last_played_at
                .map(|last| m.record.played_at > last)
                .unwrap_or(true)
            {
                tally.last_played_at = Some(m.record.played_at);
            }

            let result = classify(m.record.score_home, m.record.score_away, participant.side);
            match result {
                MatchResult::Win => {
                    tally.points += 3;
                    tally.wins += 1;
                }
                MatchResult::Draw => {
                    tally.points += 1;
                    tally.draws += 1;
                }
                MatchResult::Loss => tally.losses += 1,
            }

            tally.facts.push(MatchFacts::from_match(&m.record, participant.side));
        }
    }

    let mut entries: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|(player_id, tally)| {
            let results: Vec<ResultAt> = tally.facts.iter().map(MatchFacts::result_at).collect();
            LeaderboardEntry {
                player_id,
                username: tally.username,
                avatar_url: tally.avatar_url,
                points: tally.points,
                wins: tally.wins,
                draws: tally.draws,
                losses: tally.losses,
                games: tally.games,
                last_played_at: tally.last_played_at,
                current_streak: streak::current_streak(&results),
                badges: badges::evaluate(&tally.facts),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(a.player_id.cmp(&b.player_id))
    });
    entries.truncate(limit);
    entries
}
