use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::match_record::{MatchMode, MatchRecord, MatchWithParticipants, TeamSide};
use crate::models::stats::{
    CareerMatchStats, FavoriteTeam, FellowPlayer, ModeRecord, PlayerStatsData,
};
use crate::models::team::Team;
use crate::stats::badges;
use crate::stats::classify::classify;
use crate::stats::streak::{self, ResultAt};

/// One match reduced to the facts relevant for a single player:
/// the classified result plus the side-specific performance figures.
/// Missing snapshot fields stay absent and are tolerated downstream.
#[derive(Debug, Clone, Copy)]
pub struct MatchFacts {
    pub played_at: DateTime<Utc>,
    pub result: MatchResult,
    pub goals_for: i32,
    pub goals_against: i32,
    pub has_stats: bool,
    pub possession: Option<f64>,
    pub pass_accuracy: Option<f64>,
    pub dribbling: Option<f64>,
    pub shot_accuracy: Option<f64>,
    pub duels: Option<f64>,
    pub duels_won: Option<f64>,
    pub xg: Option<f64>,
    pub yellow_cards: Option<f64>,
}

impl MatchFacts {
    pub fn from_match(record: &MatchRecord, side: TeamSide) -> Self {
        let stats = record.match_stats.as_ref();
        Self {
            played_at: record.played_at,
            result: classify(record.score_home, record.score_away, side),
            goals_for: record.goals_for(side),
            goals_against: record.goals_against(side),
            has_stats: stats.is_some(),
            possession: stats.and_then(|s| s.possession.side(side)),
            pass_accuracy: stats.and_then(|s| s.pass_accuracy.side(side)),
            dribbling: stats.and_then(|s| s.dribbling.side(side)),
            shot_accuracy: stats.and_then(|s| s.shot_accuracy.side(side)),
            duels: stats.and_then(|s| s.duels.side(side)),
            duels_won: stats.and_then(|s| s.duels_won.side(side)),
            xg: stats.and_then(|s| s.xg.side(side)),
            yellow_cards: stats.and_then(|s| s.yellow_cards.side(side)),
        }
    }

    pub fn result_at(&self) -> ResultAt {
        ResultAt {
            played_at: self.played_at,
            result: self.result,
        }
    }
}

#[derive(Debug, Default)]
struct FellowTally {
    username: String,
    avatar_url: Option<String>,
    games: u32,
    wins: u32,
}

/// Fold a player's full match history into the stats projection.
///
/// A player with zero matches gets the fully-populated empty object:
/// all counts zero, optional fields absent, the badge catalog locked.
pub fn compute_player_stats(
    player_id: Uuid,
    matches: &[MatchWithParticipants],
    teams: &HashMap<String, Team>,
) -> PlayerStatsData {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut draws = 0u32;
    let mut bilanz_1v1 = ModeRecord::default();
    let mut bilanz_2v2 = ModeRecord::default();

    let mut opponents: HashMap<Uuid, FellowTally> = HashMap::new();
    let mut teammates: HashMap<Uuid, FellowTally> = HashMap::new();
    let mut team_usage: HashMap<String, u32> = HashMap::new();

    let mut facts: Vec<MatchFacts> = Vec::with_capacity(matches.len());

    for m in matches {
        let Some(me) = m.participant(player_id) else {
            continue;
        };
        let side = me.side;
        let result = classify(m.record.score_home, m.record.score_away, side);
        facts.push(MatchFacts::from_match(&m.record, side));

        match result {
            MatchResult::Win => wins += 1,
            MatchResult::Loss => losses += 1,
            MatchResult::Draw => draws += 1,
        }

        // Draws stay out of the per-mode tallies
        if result != MatchResult::Draw {
            let record = match m.record.mode {
                MatchMode::OneVsOne => &mut bilanz_1v1,
                MatchMode::TwoVsTwo => &mut bilanz_2v2,
            };
            if result == MatchResult::Win {
                record.wins += 1;
            } else {
                record.losses += 1;
            }
        }

        for other in &m.players {
            if other.player_id == player_id {
                continue;
            }
            let bucket = if other.side != side {
                &mut opponents
            } else {
                &mut teammates
            };
            let tally = bucket.entry(other.player_id).or_default();
            if tally.games == 0 {
                tally.username = other.username.clone();
                tally.avatar_url = other.avatar_url.clone();
            }
            tally.games += 1;
            if result == MatchResult::Win {
                tally.wins += 1;
            }
        }

        if let Some(team_ref) = &me.team_ref {
            *team_usage.entry(team_ref.clone()).or_insert(0) += 1;
        }
    }

    let total_games = wins + losses + draws;
    let win_rate = if total_games > 0 {
        ((wins as f64 / total_games as f64) * 100.0).round() as i32
    } else {
        0
    };

    let results: Vec<ResultAt> = facts.iter().map(MatchFacts::result_at).collect();

    PlayerStatsData {
        total_games,
        wins,
        losses,
        draws,
        win_rate,
        bilanz_1v1,
        bilanz_2v2,
        favorite_opponent: favorite_opponent(&opponents),
        best_teammate: best_teammate(&teammates),
        favorite_team: favorite_team(&team_usage, teams),
        current_streak: streak::current_streak(&results),
        last_played_at: facts.iter().map(|f| f.played_at).max(),
        career_match_stats: career_stats(&facts),
        badges: badges::evaluate(&facts),
    }
}

/// Most games against; ties broken by lowest player id so the pick is
/// stable across recomputations.
fn favorite_opponent(opponents: &HashMap<Uuid, FellowTally>) -> Option<FellowPlayer> {
    let mut candidates: Vec<(&Uuid, &FellowTally)> = opponents.iter().collect();
    candidates.sort_by(|a, b| b.1.games.cmp(&a.1.games).then(a.0.cmp(b.0)));
    candidates.first().map(|(_, tally)| FellowPlayer {
        username: tally.username.clone(),
        avatar_url: tally.avatar_url.clone(),
        games: tally.games,
    })
}

/// Highest win rate among teammates with at least 2 shared games;
/// falls back to the most-frequent teammate when none qualify.
/// Ties broken by games played, then lowest player id.
fn best_teammate(teammates: &HashMap<Uuid, FellowTally>) -> Option<FellowPlayer> {
    let mut eligible: Vec<(&Uuid, &FellowTally)> =
        teammates.iter().filter(|(_, t)| t.games >= 2).collect();

    let pick = if eligible.is_empty() {
        let mut all: Vec<(&Uuid, &FellowTally)> = teammates.iter().collect();
        all.sort_by(|a, b| b.1.games.cmp(&a.1.games).then(a.0.cmp(b.0)));
        all.into_iter().next()
    } else {
        eligible.sort_by(|a, b| {
            let rate_a = a.1.wins as f64 / a.1.games as f64;
            let rate_b = b.1.wins as f64 / b.1.games as f64;
            rate_b
                .partial_cmp(&rate_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.1.games.cmp(&a.1.games))
                .then(a.0.cmp(b.0))
        });
        eligible.into_iter().next()
    };

    pick.map(|(_, tally)| FellowPlayer {
        username: tally.username.clone(),
        avatar_url: tally.avatar_url.clone(),
        games: tally.games,
    })
}

/// Most-used team reference, resolved against the fetched team records.
/// An unresolvable reference still counts, displayed as "Unknown".
fn favorite_team(
    team_usage: &HashMap<String, u32>,
    teams: &HashMap<String, Team>,
) -> Option<FavoriteTeam> {
    let mut entries: Vec<(&String, &u32)> = team_usage.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    entries.first().map(|(team_ref, games)| {
        let team = teams.get(*team_ref);
        FavoriteTeam {
            name: team.map(|t| t.name.clone()).unwrap_or_else(|| "Unknown".to_string()),
            short_name: team.and_then(|t| t.short_name.clone()),
            games: **games,
        }
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_pct(value: f64) -> i32 {
    value.round() as i32
}

/// Career averages over matches carrying a performance snapshot.
/// Absent fields count as zero (the snapshot extraction is lossy and
/// tolerated); no snapshot-carrying matches at all yields `None`.
pub fn career_stats(facts: &[MatchFacts]) -> Option<CareerMatchStats> {
    let with_stats: Vec<&MatchFacts> = facts.iter().filter(|f| f.has_stats).collect();
    if with_stats.is_empty() {
        return None;
    }

    let n = with_stats.len() as f64;
    let sum = |get: fn(&MatchFacts) -> Option<f64>| -> f64 {
        with_stats.iter().map(|&f| get(f).unwrap_or(0.0)).sum()
    };

    let total_xg = sum(|f| f.xg);
    let goals_with_stats: f64 = with_stats.iter().map(|f| f.goals_for as f64).sum();
    let xg_efficiency = if total_xg > 0.0 {
        Some(round1(goals_with_stats / total_xg))
    } else {
        None
    };

    let total_duels = sum(|f| f.duels);
    let total_duels_won = sum(|f| f.duels_won);
    let avg_duels_won_rate = if total_duels > 0.0 {
        Some(round_pct(total_duels_won / total_duels * 100.0))
    } else {
        None
    };

    Some(CareerMatchStats {
        games_with_stats: with_stats.len() as u32,
        avg_possession: round_pct(sum(|f| f.possession) / n),
        avg_pass_accuracy: round_pct(sum(|f| f.pass_accuracy) / n),
        avg_dribbling: round_pct(sum(|f| f.dribbling) / n),
        avg_shot_accuracy: round_pct(sum(|f| f.shot_accuracy) / n),
        avg_xg_per_game: Some(round1(total_xg / n)),
        total_xg: round1(total_xg),
        xg_efficiency,
        avg_duels_won_rate,
    })
}
