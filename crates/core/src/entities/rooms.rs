use crate::ids::{RoomId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Dm,
    Group,
}

/// Row in the `rooms` relation. `last_text`/`updated_at` form the
/// denormalized preview shown in the room list; they trail the message log
/// and are repaired rather than rolled back when out of sync. Rooms are
/// never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub title: String,
    pub avatar_url: Option<String>,
    pub created_by: UserId,
    pub last_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn is_group(&self) -> bool {
        self.kind == RoomKind::Group
    }
}
