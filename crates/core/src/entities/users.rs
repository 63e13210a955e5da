use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presence status shown next to a user in friend and member lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Busy,
    Offline,
}

impl Default for Presence {
    fn default() -> Self {
        Presence::Offline
    }
}

/// Profile row in the `users` relation. Created on first successful
/// authentication; `username` stays unset until the user claims one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    /// Globally unique, lowercase `[a-z0-9_]{3,32}`. Claimed exactly once.
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub status: Presence,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to render for this user: username when claimed, otherwise
    /// display name, otherwise email.
    pub fn visible_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or(&self.email)
    }
}
