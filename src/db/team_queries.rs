use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::team::Team;

/// All selectable team records, ordered by name
pub async fn fetch_all_teams(pool: &PgPool) -> Result<Vec<Team>, StoreError> {
    let teams = sqlx::query_as::<_, Team>(
        "SELECT id, name, short_name, logo_url FROM teams ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(teams)
}

/// Resolve participant team references to team records, keyed by the
/// reference string. References that are not team ids are left
/// unresolved; the stats engine falls back to "Unknown" for those.
pub async fn fetch_teams_by_refs(
    pool: &PgPool,
    refs: &[String],
) -> Result<HashMap<String, Team>, StoreError> {
    let ids: Vec<Uuid> = refs.iter().filter_map(|r| Uuid::parse_str(r).ok()).collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let teams = sqlx::query_as::<_, Team>(
        "SELECT id, name, short_name, logo_url FROM teams WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(teams
        .into_iter()
        .map(|team| (team.id.to_string(), team))
        .collect())
}
