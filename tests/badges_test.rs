use chrono::{Duration, TimeZone, Utc};

use kicker_backend::models::common::MatchResult;
use kicker_backend::models::stats::BadgeKind;
use kicker_backend::stats::aggregate::MatchFacts;
use kicker_backend::stats::badges::evaluate;

fn fact(day: i64, result: MatchResult, goals_for: i32, goals_against: i32) -> MatchFacts {
    MatchFacts {
        played_at: Utc.with_ymd_and_hms(2026, 2, 1, 20, 0, 0).unwrap() + Duration::days(day),
        result,
        goals_for,
        goals_against,
        has_stats: false,
        possession: None,
        pass_accuracy: None,
        dribbling: None,
        shot_accuracy: None,
        duels: None,
        duels_won: None,
        xg: None,
        yellow_cards: None,
    }
}

fn is_unlocked(facts: &[MatchFacts], kind: BadgeKind) -> bool {
    evaluate(facts)
        .into_iter()
        .find(|b| b.kind == kind)
        .map(|b| b.unlocked)
        .unwrap()
}

use MatchResult::{Draw, Loss, Win};

#[test]
fn catalog_is_complete_and_ordered() {
    let badges = evaluate(&[]);
    assert_eq!(badges.len(), 15);
    let kinds: Vec<BadgeKind> = badges.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, BadgeKind::CATALOG.to_vec());
    assert!(badges.iter().all(|b| !b.unlocked));
    assert!(badges.iter().all(|b| !b.emoji.is_empty()));
}

#[test]
fn clean_sheet_needs_a_win_not_a_goalless_draw() {
    let won_to_zero = [fact(0, Win, 2, 0)];
    assert!(is_unlocked(&won_to_zero, BadgeKind::CleanSheet));

    let goalless_draw = [fact(0, Draw, 0, 0)];
    assert!(!is_unlocked(&goalless_draw, BadgeKind::CleanSheet));

    let won_but_conceded = [fact(0, Win, 3, 1)];
    assert!(!is_unlocked(&won_but_conceded, BadgeKind::CleanSheet));
}

#[test]
fn seriensieger_requires_a_five_win_run_ever() {
    let mut history: Vec<MatchFacts> = (0..5).map(|d| fact(d, Win, 1, 0)).collect();
    history.push(fact(5, Loss, 0, 1));
    history.extend((6..8).map(|d| fact(d, Win, 1, 0)));
    assert!(is_unlocked(&history, BadgeKind::Seriensieger));

    let short: Vec<MatchFacts> = (0..4).map(|d| fact(d, Win, 1, 0)).collect();
    assert!(!is_unlocked(&short, BadgeKind::Seriensieger));
}

#[test]
fn seriensieger_run_survives_draws() {
    let mut history: Vec<MatchFacts> = (0..3).map(|d| fact(d, Win, 2, 1)).collect();
    history.push(fact(3, Draw, 1, 1));
    history.extend((4..6).map(|d| fact(d, Win, 2, 1)));
    assert!(is_unlocked(&history, BadgeKind::Seriensieger));
}

#[test]
fn participation_milestones() {
    let one = [fact(0, Loss, 0, 1)];
    assert!(is_unlocked(&one, BadgeKind::Debuetant));
    assert!(!is_unlocked(&one, BadgeKind::Stammspieler));

    let regular: Vec<MatchFacts> = (0..25).map(|d| fact(d, Draw, 1, 1)).collect();
    assert!(is_unlocked(&regular, BadgeKind::Stammspieler));
    assert!(!is_unlocked(&regular, BadgeKind::Klublegende));

    let legend: Vec<MatchFacts> = (0..100).map(|d| fact(d, Loss, 0, 1)).collect();
    assert!(is_unlocked(&legend, BadgeKind::Klublegende));
}

#[test]
fn torjaeger_counts_lifetime_goals() {
    let history: Vec<MatchFacts> = (0..10).map(|d| fact(d, Win, 5, 0)).collect();
    assert!(is_unlocked(&history, BadgeKind::Torjaeger50));

    let few: Vec<MatchFacts> = (0..10).map(|d| fact(d, Win, 4, 0)).collect();
    assert!(!is_unlocked(&few, BadgeKind::Torjaeger50));
}

#[test]
fn schuetzenfest_fires_on_a_single_five_goal_match() {
    assert!(is_unlocked(&[fact(0, Win, 5, 2)], BadgeKind::Schuetzenfest));
    assert!(!is_unlocked(&[fact(0, Win, 4, 2)], BadgeKind::Schuetzenfest));
}

#[test]
fn konter_king_and_david_vs_goliath_split_on_possession() {
    let mut underdog = fact(0, Win, 1, 0);
    underdog.has_stats = true;
    underdog.possession = Some(35.0);
    assert!(is_unlocked(&[underdog], BadgeKind::KonterKing));
    assert!(!is_unlocked(&[underdog], BadgeKind::DavidVsGoliath));

    underdog.possession = Some(25.0);
    assert!(is_unlocked(&[underdog], BadgeKind::DavidVsGoliath));

    // A loss with low possession unlocks neither
    let mut lost = fact(0, Loss, 0, 1);
    lost.has_stats = true;
    lost.possession = Some(20.0);
    assert!(!is_unlocked(&[lost], BadgeKind::KonterKing));
}

#[test]
fn perfektionist_requires_exactly_one_hundred_percent_passes() {
    let mut perfect = fact(0, Draw, 1, 1);
    perfect.has_stats = true;
    perfect.pass_accuracy = Some(100.0);
    assert!(is_unlocked(&[perfect], BadgeKind::Perfektionist));

    perfect.pass_accuracy = Some(99.0);
    assert!(!is_unlocked(&[perfect], BadgeKind::Perfektionist));
}

#[test]
fn tiki_taka_needs_three_snapshot_matches_above_threshold() {
    let mut matches: Vec<MatchFacts> = (0..3)
        .map(|d| {
            let mut f = fact(d, Win, 2, 1);
            f.has_stats = true;
            f.pass_accuracy = Some(90.0);
            f
        })
        .collect();
    assert!(is_unlocked(&matches, BadgeKind::TikiTaka));

    matches.pop();
    assert!(!is_unlocked(&matches, BadgeKind::TikiTaka));
}

#[test]
fn ball_magnet_averages_possession() {
    let matches: Vec<MatchFacts> = [60.0, 58.0, 50.0]
        .iter()
        .enumerate()
        .map(|(d, possession)| {
            let mut f = fact(d as i64, Draw, 1, 1);
            f.has_stats = true;
            f.possession = Some(*possession);
            f
        })
        .collect();
    // Average 56% > 55%
    assert!(is_unlocked(&matches, BadgeKind::BallMagnet));
}

#[test]
fn xg_killer_needs_five_snapshot_matches_and_efficiency() {
    let matches: Vec<MatchFacts> = (0..5)
        .map(|d| {
            let mut f = fact(d, Win, 2, 0);
            f.has_stats = true;
            f.xg = Some(1.0);
            f
        })
        .collect();
    // 10 goals on 5.0 xG: efficiency 2.0
    assert!(is_unlocked(&matches, BadgeKind::XgKiller));
    assert!(!is_unlocked(&matches[..4], BadgeKind::XgKiller));
}

#[test]
fn duell_monster_rates_total_duels_won() {
    let matches: Vec<MatchFacts> = (0..3)
        .map(|d| {
            let mut f = fact(d, Draw, 1, 1);
            f.has_stats = true;
            f.duels = Some(20.0);
            f.duels_won = Some(13.0);
            f
        })
        .collect();
    // 39 of 60 = 65%
    assert!(is_unlocked(&matches, BadgeKind::DuellMonster));
}

#[test]
fn fair_play_counts_matches_without_card_data_as_clean() {
    let clean: Vec<MatchFacts> = (0..10).map(|d| fact(d, Draw, 0, 0)).collect();
    assert!(is_unlocked(&clean, BadgeKind::FairPlay));

    let mut carded: Vec<MatchFacts> = (0..10).map(|d| fact(d, Draw, 0, 0)).collect();
    for f in carded.iter_mut() {
        f.has_stats = true;
        f.yellow_cards = Some(1.0);
    }
    assert!(!is_unlocked(&carded, BadgeKind::FairPlay));
}
