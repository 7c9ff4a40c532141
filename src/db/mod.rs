//! Match record store access. The hosted platform owns the data; this
//! layer only fetches typed snapshots for the stats engine and writes
//! new match rows on behalf of handlers.

pub mod match_queries;
pub mod profile_queries;
pub mod team_queries;

/// Failure at the match record store boundary. Propagated to the
/// caller as-is; the stats engine never retries or masks it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("match record store query failed: {0}")]
    Database(#[from] sqlx::Error),
}
