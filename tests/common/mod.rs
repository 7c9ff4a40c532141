#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use kicker_backend::models::match_record::{
    MatchMode, MatchParticipant, MatchPeriod, MatchRecord, MatchWithParticipants,
    PerformanceStats, SideSplit, TeamSide,
};

/// Deterministic player ids so tie-breaks are predictable in tests
pub fn player(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// A fixed base date plus `day` days
pub fn ts(day: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + Duration::days(day)
}

pub fn build_match(
    day: i64,
    mode: MatchMode,
    score_home: i32,
    score_away: i32,
    players: &[(Uuid, TeamSide)],
) -> MatchWithParticipants {
    let id = Uuid::new_v4();
    MatchWithParticipants {
        record: MatchRecord {
            id,
            mode,
            score_home,
            score_away,
            played_at: ts(day),
            created_by: players[0].0,
            result_type: MatchPeriod::Regular,
            score_timeline: None,
            match_stats: None,
            report: None,
            stats_image_url: None,
        },
        players: players
            .iter()
            .map(|(player_id, side)| MatchParticipant {
                match_id: id,
                player_id: *player_id,
                side: *side,
                team_ref: None,
                rating: None,
                username: format!("player-{}", &player_id.to_string()[..8]),
                avatar_url: None,
            })
            .collect(),
    }
}

pub fn one_v_one(
    day: i64,
    score_home: i32,
    score_away: i32,
    home: Uuid,
    away: Uuid,
) -> MatchWithParticipants {
    build_match(
        day,
        MatchMode::OneVsOne,
        score_home,
        score_away,
        &[(home, TeamSide::Home), (away, TeamSide::Away)],
    )
}

pub fn two_v_two(
    day: i64,
    score_home: i32,
    score_away: i32,
    home: (Uuid, Uuid),
    away: (Uuid, Uuid),
) -> MatchWithParticipants {
    build_match(
        day,
        MatchMode::TwoVsTwo,
        score_home,
        score_away,
        &[
            (home.0, TeamSide::Home),
            (home.1, TeamSide::Home),
            (away.0, TeamSide::Away),
            (away.1, TeamSide::Away),
        ],
    )
}

/// Attach a performance snapshot built by the given closure
pub fn with_stats(
    mut m: MatchWithParticipants,
    build: impl FnOnce(&mut PerformanceStats),
) -> MatchWithParticipants {
    let mut stats = PerformanceStats::default();
    build(&mut stats);
    m.record.match_stats = Some(stats);
    m
}

pub fn split(home: f64, away: f64) -> SideSplit {
    SideSplit::of(home, away)
}
