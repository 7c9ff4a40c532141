use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player identity as managed by the hosted auth/profile platform.
/// Created externally, never mutated here.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct PlayerProfile {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Display slice of a profile embedded in stats responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileDisplay {
    pub username: String,
    pub avatar_url: Option<String>,
}

impl ProfileDisplay {
    /// Profiles can be missing for deleted accounts; the display name
    /// falls back to "Unknown" as the rest of the API does.
    pub fn from_optional(profile: Option<&PlayerProfile>) -> Self {
        match profile {
            Some(p) => Self {
                username: p.username.clone(),
                avatar_url: p.avatar_url.clone(),
            },
            None => Self {
                username: "Unknown".to_string(),
                avatar_url: None,
            },
        }
    }
}
