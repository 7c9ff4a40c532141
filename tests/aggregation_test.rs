use std::collections::HashMap;

use uuid::Uuid;

use kicker_backend::models::common::MatchResult;
use kicker_backend::models::team::Team;
use kicker_backend::stats::aggregate::compute_player_stats;

mod common;
use common::{one_v_one, player, split, two_v_two, with_stats};

#[test]
fn zero_matches_yield_the_empty_projection() {
    let me = player(1);
    let stats = compute_player_stats(me, &[], &HashMap::new());

    assert_eq!(stats.total_games, 0);
    assert_eq!(stats.wins, 0);
    assert_eq!(stats.losses, 0);
    assert_eq!(stats.draws, 0);
    assert_eq!(stats.win_rate, 0);
    assert_eq!(stats.bilanz_1v1.wins, 0);
    assert_eq!(stats.bilanz_2v2.losses, 0);
    assert!(stats.favorite_opponent.is_none());
    assert!(stats.best_teammate.is_none());
    assert!(stats.favorite_team.is_none());
    assert!(stats.current_streak.is_none());
    assert!(stats.last_played_at.is_none());
    assert!(stats.career_match_stats.is_none());
    // The whole catalog is present, just locked
    assert_eq!(stats.badges.len(), 15);
    assert!(stats.badges.iter().all(|b| !b.unlocked));
}

#[test]
fn one_win_one_loss_is_a_fifty_percent_win_rate() {
    let me = player(1);
    let rival = player(2);
    let matches = vec![
        one_v_one(0, 3, 1, me, rival),
        one_v_one(1, 0, 2, me, rival),
    ];

    let stats = compute_player_stats(me, &matches, &HashMap::new());
    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.win_rate, 50);
    assert_eq!(stats.bilanz_1v1.wins, 1);
    assert_eq!(stats.bilanz_1v1.losses, 1);
    assert_eq!(stats.last_played_at, Some(common::ts(1)));
}

#[test]
fn draws_count_globally_but_stay_out_of_mode_records() {
    let me = player(1);
    let rival = player(2);
    let matches = vec![
        one_v_one(0, 2, 2, me, rival),
        one_v_one(1, 1, 0, me, rival),
    ];

    let stats = compute_player_stats(me, &matches, &HashMap::new());
    assert_eq!(stats.draws, 1);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.bilanz_1v1.wins, 1);
    assert_eq!(stats.bilanz_1v1.losses, 0);
    assert_eq!(stats.win_rate, 50);
}

#[test]
fn favorite_opponent_is_the_most_faced_with_id_tie_break() {
    let me = player(1);
    let often = player(2);
    let rarely = player(9);
    let matches = vec![
        one_v_one(0, 1, 0, me, often),
        one_v_one(1, 0, 1, me, often),
        one_v_one(2, 2, 0, me, rarely),
    ];

    let stats = compute_player_stats(me, &matches, &HashMap::new());
    let favorite = stats.favorite_opponent.unwrap();
    assert_eq!(favorite.games, 2);
    assert!(favorite.username.starts_with("player-"));

    // Equal counts: the lower player id wins deterministically
    let tied = vec![one_v_one(0, 1, 0, me, often), one_v_one(1, 1, 0, me, rarely)];
    let stats = compute_player_stats(me, &tied, &HashMap::new());
    let favorite = stats.favorite_opponent.unwrap();
    assert_eq!(favorite.username, format!("player-{}", &often.to_string()[..8]));
}

#[test]
fn best_teammate_prefers_win_rate_over_frequency() {
    let me = player(1);
    let lucky = player(2);
    let frequent = player(3);
    let a = player(10);
    let b = player(11);

    let matches = vec![
        // 2 games with `lucky`, both won
        two_v_two(0, 2, 0, (me, lucky), (a, b)),
        two_v_two(1, 3, 1, (me, lucky), (a, b)),
        // 3 games with `frequent`, one won
        two_v_two(2, 1, 0, (me, frequent), (a, b)),
        two_v_two(3, 0, 2, (me, frequent), (a, b)),
        two_v_two(4, 1, 4, (me, frequent), (a, b)),
    ];

    let stats = compute_player_stats(me, &matches, &HashMap::new());
    let best = stats.best_teammate.unwrap();
    assert_eq!(best.username, format!("player-{}", &lucky.to_string()[..8]));
    assert_eq!(best.games, 2);
}

#[test]
fn best_teammate_falls_back_to_most_frequent_below_two_games() {
    let me = player(1);
    let once = player(2);
    let a = player(10);
    let b = player(11);

    let matches = vec![two_v_two(0, 0, 3, (me, once), (a, b))];
    let stats = compute_player_stats(me, &matches, &HashMap::new());
    let best = stats.best_teammate.unwrap();
    assert_eq!(best.games, 1);
}

#[test]
fn favorite_team_resolves_against_team_records() {
    let me = player(1);
    let rival = player(2);
    let team_id = Uuid::from_u128(77);

    let mut m1 = one_v_one(0, 2, 0, me, rival);
    m1.players[0].team_ref = Some(team_id.to_string());
    let mut m2 = one_v_one(1, 1, 1, me, rival);
    m2.players[0].team_ref = Some(team_id.to_string());

    let mut teams = HashMap::new();
    teams.insert(
        team_id.to_string(),
        Team {
            id: team_id,
            name: "FC Hinterhof".to_string(),
            short_name: Some("FCH".to_string()),
            logo_url: None,
        },
    );

    let stats = compute_player_stats(me, &[m1, m2], &teams);
    let favorite = stats.favorite_team.unwrap();
    assert_eq!(favorite.name, "FC Hinterhof");
    assert_eq!(favorite.short_name.as_deref(), Some("FCH"));
    assert_eq!(favorite.games, 2);
}

#[test]
fn unresolvable_team_refs_still_count_as_unknown() {
    let me = player(1);
    let rival = player(2);
    let mut m = one_v_one(0, 2, 0, me, rival);
    m.players[0].team_ref = Some("somewhere-else".to_string());

    let stats = compute_player_stats(me, &[m], &HashMap::new());
    let favorite = stats.favorite_team.unwrap();
    assert_eq!(favorite.name, "Unknown");
    assert_eq!(favorite.games, 1);
}

#[test]
fn career_stats_average_over_snapshot_matches_only() {
    let me = player(1);
    let rival = player(2);

    let m1 = with_stats(one_v_one(0, 4, 1, me, rival), |s| {
        s.possession = split(60.0, 40.0);
        s.pass_accuracy = split(90.0, 70.0);
        s.xg = split(2.5, 1.0);
        s.duels = split(20.0, 20.0);
        s.duels_won = split(14.0, 6.0);
    });
    let m2 = with_stats(one_v_one(1, 2, 3, me, rival), |s| {
        s.possession = split(50.0, 50.0);
        s.pass_accuracy = split(81.0, 85.0);
        s.xg = split(1.5, 2.0);
        s.duels = split(10.0, 10.0);
        s.duels_won = split(4.0, 6.0);
    });
    // No snapshot: excluded from the averages entirely
    let m3 = one_v_one(2, 1, 0, me, rival);

    let stats = compute_player_stats(me, &[m1, m2, m3], &HashMap::new());
    let career = stats.career_match_stats.unwrap();

    assert_eq!(career.games_with_stats, 2);
    assert_eq!(career.avg_possession, 55);
    assert_eq!(career.avg_pass_accuracy, 86);
    assert_eq!(career.total_xg, 4.0);
    assert_eq!(career.avg_xg_per_game, Some(2.0));
    // 6 goals in snapshot matches on 4.0 expected
    assert_eq!(career.xg_efficiency, Some(1.5));
    // 18 of 30 duels won
    assert_eq!(career.avg_duels_won_rate, Some(60));
}

#[test]
fn xg_efficiency_is_absent_without_expected_goals() {
    let me = player(1);
    let rival = player(2);
    let m = with_stats(one_v_one(0, 2, 0, me, rival), |s| {
        s.possession = split(50.0, 50.0);
    });

    let stats = compute_player_stats(me, &[m], &HashMap::new());
    let career = stats.career_match_stats.unwrap();
    assert_eq!(career.xg_efficiency, None);
    assert_eq!(career.avg_duels_won_rate, None);
}

#[test]
fn current_streak_comes_from_the_same_history() {
    let me = player(1);
    let rival = player(2);
    let matches = vec![
        one_v_one(0, 0, 1, me, rival),
        one_v_one(1, 2, 0, me, rival),
        one_v_one(2, 3, 1, me, rival),
    ];

    let stats = compute_player_stats(me, &matches, &HashMap::new());
    let streak = stats.current_streak.unwrap();
    assert_eq!(streak.streak_type, MatchResult::Win);
    assert_eq!(streak.count, 2);
}

#[test]
fn recomputation_on_an_unchanged_snapshot_is_identical() {
    let me = player(1);
    let rival = player(2);
    let teammate = player(3);
    let a = player(10);
    let b = player(11);
    let matches = vec![
        one_v_one(0, 3, 1, me, rival),
        two_v_two(1, 2, 2, (me, teammate), (a, b)),
        with_stats(one_v_one(2, 1, 0, me, rival), |s| {
            s.possession = split(45.0, 55.0);
            s.xg = split(0.8, 1.1);
        }),
    ];

    let first = compute_player_stats(me, &matches, &HashMap::new());
    let second = compute_player_stats(me, &matches, &HashMap::new());
    assert_eq!(first, second);
}
