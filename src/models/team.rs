use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A selectable club/team record used for display resolution
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
}
