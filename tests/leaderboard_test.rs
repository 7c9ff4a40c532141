use kicker_backend::models::common::MatchResult;
use kicker_backend::models::match_record::MatchWithParticipants;
use kicker_backend::stats::leaderboard::rank_players;

mod common;
use common::{one_v_one, player};

#[test]
fn a_single_decided_match_awards_three_points_to_the_winner() {
    let winner = player(1);
    let loser = player(2);
    let matches = vec![one_v_one(0, 2, 0, winner, loser)];

    let entries = rank_players(&matches, 10);
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first.player_id, winner);
    assert_eq!(first.points, 3);
    assert_eq!(first.wins, 1);
    assert_eq!(first.games, 1);

    let second = &entries[1];
    assert_eq!(second.player_id, loser);
    assert_eq!(second.points, 0);
    assert_eq!(second.losses, 1);
    assert_eq!(second.games, 1);
}

#[test]
fn draws_award_one_point_each() {
    let a = player(1);
    let b = player(2);
    let matches = vec![one_v_one(0, 1, 1, a, b)];

    let entries = rank_players(&matches, 10);
    assert!(entries.iter().all(|e| e.points == 1 && e.draws == 1));
}

#[test]
fn ranking_is_points_then_wins_then_player_id() {
    let a = player(1);
    let b = player(2);
    let c = player(3);
    let d = player(4);

    let matches = vec![
        // a beats b twice: a 6 points
        one_v_one(0, 2, 0, a, b),
        one_v_one(1, 3, 1, a, b),
        // c and d trade wins: 3 points each, 1 win each -> id decides
        one_v_one(2, 1, 0, c, d),
        one_v_one(3, 0, 1, c, d),
    ];

    let entries = rank_players(&matches, 10);
    let order: Vec<_> = entries.iter().map(|e| e.player_id).collect();
    assert_eq!(order, vec![a, c, d, b]);
}

#[test]
fn truncation_happens_after_sorting() {
    let a = player(1);
    let b = player(2);
    let c = player(3);

    let matches = vec![
        one_v_one(0, 0, 2, a, b), // b wins
        one_v_one(1, 0, 2, a, c), // c wins
    ];

    let entries = rank_players(&matches, 1);
    assert_eq!(entries.len(), 1);
    // b and c are tied on points and wins; the lower id must survive
    assert_eq!(entries[0].player_id, b);
}

#[test]
fn streaks_and_badges_are_scoped_to_the_given_matches() {
    let star = player(1);
    let rest = player(2);

    let matches: Vec<MatchWithParticipants> =
        (0..5).map(|d| one_v_one(d, 2, 0, star, rest)).collect();

    let entries = rank_players(&matches, 10);
    let top = &entries[0];
    assert_eq!(top.player_id, star);
    assert_eq!(top.points, 15);

    let streak = top.current_streak.unwrap();
    assert_eq!(streak.streak_type, MatchResult::Win);
    assert_eq!(streak.count, 5);

    // Five straight wins inside the scope unlock the streak badge
    assert!(top
        .badges
        .iter()
        .any(|b| matches!(b.kind, kicker_backend::models::stats::BadgeKind::Seriensieger)
            && b.unlocked));

    let last = &entries[1];
    assert_eq!(last.current_streak.unwrap().streak_type, MatchResult::Loss);
}

#[test]
fn last_played_at_tracks_the_most_recent_match_in_scope() {
    let a = player(1);
    let b = player(2);
    let matches = vec![one_v_one(3, 1, 0, a, b), one_v_one(7, 0, 0, a, b)];

    let entries = rank_players(&matches, 10);
    assert!(entries
        .iter()
        .all(|e| e.last_played_at == Some(common::ts(7))));
}

#[test]
fn an_empty_match_set_yields_an_empty_leaderboard() {
    assert!(rank_players(&[], 10).is_empty());
}
