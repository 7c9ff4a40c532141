use sqlx::PgPool;
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::profile::PlayerProfile;

/// A single player profile, if it exists
pub async fn fetch_profile(
    pool: &PgPool,
    player_id: Uuid,
) -> Result<Option<PlayerProfile>, StoreError> {
    let profile = sqlx::query_as::<_, PlayerProfile>(
        "SELECT id, username, avatar_url FROM profiles WHERE id = $1",
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile)
}

/// All player profiles, ordered by username
pub async fn fetch_all_profiles(pool: &PgPool) -> Result<Vec<PlayerProfile>, StoreError> {
    let profiles = sqlx::query_as::<_, PlayerProfile>(
        "SELECT id, username, avatar_url FROM profiles ORDER BY username ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(profiles)
}
