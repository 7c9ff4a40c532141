use crate::models::common::MatchResult;
use crate::models::stats::{Badge, BadgeKind};
use crate::stats::aggregate::MatchFacts;
use crate::stats::streak::{self, ResultAt};

/// Sums and averages the predicates compare against. Derived once per
/// evaluation, unrounded: the display layer rounds, the thresholds
/// don't.
struct Derived {
    total_games: u32,
    total_goals: i64,
    games_with_stats: u32,
    avg_pass_accuracy: f64,
    avg_possession: f64,
    xg_efficiency: Option<f64>,
    duel_win_rate: Option<f64>,
    longest_win_run: u32,
}

impl Derived {
    fn from_facts(facts: &[MatchFacts]) -> Self {
        let with_stats: Vec<&MatchFacts> = facts.iter().filter(|f| f.has_stats).collect();
        let n = with_stats.len() as f64;

        let sum = |get: fn(&MatchFacts) -> Option<f64>| -> f64 {
            with_stats.iter().map(|&f| get(f).unwrap_or(0.0)).sum()
        };

        let total_xg = sum(|f| f.xg);
        let goals_with_stats: f64 = with_stats.iter().map(|f| f.goals_for as f64).sum();
        let total_duels = sum(|f| f.duels);
        let total_duels_won = sum(|f| f.duels_won);

        let results: Vec<ResultAt> = facts.iter().map(MatchFacts::result_at).collect();

        Self {
            total_games: facts.len() as u32,
            total_goals: facts.iter().map(|f| f.goals_for as i64).sum(),
            games_with_stats: with_stats.len() as u32,
            avg_pass_accuracy: if n > 0.0 { sum(|f| f.pass_accuracy) / n } else { 0.0 },
            avg_possession: if n > 0.0 { sum(|f| f.possession) / n } else { 0.0 },
            xg_efficiency: (total_xg > 0.0).then(|| goals_with_stats / total_xg),
            duel_win_rate: (total_duels > 0.0).then(|| total_duels_won / total_duels * 100.0),
            longest_win_run: streak::longest_win_run(&results),
        }
    }
}

fn won_with_possession_below(facts: &[MatchFacts], threshold: f64) -> bool {
    facts.iter().any(|f| {
        f.result == MatchResult::Win && f.possession.map(|p| p < threshold).unwrap_or(false)
    })
}

fn unlocked(kind: BadgeKind, facts: &[MatchFacts], derived: &Derived) -> bool {
    match kind {
        BadgeKind::TikiTaka => derived.games_with_stats >= 3 && derived.avg_pass_accuracy > 85.0,
        BadgeKind::BallMagnet => derived.games_with_stats >= 3 && derived.avg_possession > 55.0,
        BadgeKind::KonterKing => won_with_possession_below(facts, 40.0),
        BadgeKind::XgKiller => {
            derived.games_with_stats >= 5
                && derived.xg_efficiency.map(|e| e > 1.3).unwrap_or(false)
        }
        BadgeKind::DuellMonster => {
            derived.games_with_stats >= 3
                && derived.duel_win_rate.map(|r| r > 60.0).unwrap_or(false)
        }
        BadgeKind::Perfektionist => facts
            .iter()
            .any(|f| f.pass_accuracy.map(|p| p == 100.0).unwrap_or(false)),
        BadgeKind::Schuetzenfest => facts.iter().any(|f| f.goals_for >= 5),
        BadgeKind::CleanSheet => facts.iter().any(|f| {
            f.result == MatchResult::Win && f.goals_for > 0 && f.goals_against == 0
        }),
        BadgeKind::DavidVsGoliath => won_with_possession_below(facts, 30.0),
        // Matches without card data count as zero yellows
        BadgeKind::FairPlay => {
            facts
                .iter()
                .filter(|f| f.yellow_cards.unwrap_or(0.0) == 0.0)
                .count()
                >= 10
        }
        BadgeKind::Debuetant => derived.total_games >= 1,
        BadgeKind::Stammspieler => derived.total_games >= 25,
        BadgeKind::Klublegende => derived.total_games >= 100,
        BadgeKind::Torjaeger50 => derived.total_goals >= 50,
        BadgeKind::Seriensieger => derived.longest_win_run >= 5,
    }
}

/// Evaluate the full catalog against a player's history. Always emits
/// every badge in catalog order; badges are a projection, re-derived
/// from raw history on every request so corrections apply retroactively.
pub fn evaluate(facts: &[MatchFacts]) -> Vec<Badge> {
    let derived = Derived::from_facts(facts);
    BadgeKind::CATALOG
        .iter()
        .map(|kind| Badge::new(*kind, unlocked(*kind, facts, &derived)))
        .collect()
}
