//! The stats/leaderboard aggregation and gamification engine.
//!
//! Everything in here is a pure, synchronous transform over an
//! already-fetched in-memory snapshot of matches. No I/O, no shared
//! state; recomputing on an unchanged snapshot yields identical output.

pub mod aggregate;
pub mod badges;
pub mod classify;
pub mod h2h;
pub mod leaderboard;
pub mod streak;

pub use classify::classify;
