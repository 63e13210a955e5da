use crate::ids::{RoomId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    /// Content is the public URL of a blob already uploaded to object storage.
    File,
    /// Group invite delivered through a DM room; `group_id`/`group_title`
    /// identify the room being invited into, which is always distinct from
    /// the room the message sits in.
    Invite,
}

/// Row in the `messages` relation. Append-only: never edited or deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub room_id: RoomId,
    pub sender_id: UserId,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub group_id: Option<RoomId>,
    pub group_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn text(room_id: RoomId, sender_id: UserId, content: String) -> Self {
        Self::build(room_id, sender_id, content, MessageKind::Text, None, None)
    }

    pub fn file(room_id: RoomId, sender_id: UserId, url: String) -> Self {
        Self::build(room_id, sender_id, url, MessageKind::File, None, None)
    }

    pub fn invite(
        room_id: RoomId,
        sender_id: UserId,
        group_id: RoomId,
        group_title: String,
    ) -> Self {
        // The observed rows carry the literal "invite" as content.
        Self::build(
            room_id,
            sender_id,
            "invite".to_string(),
            MessageKind::Invite,
            Some(group_id),
            Some(group_title),
        )
    }

    fn build(
        room_id: RoomId,
        sender_id: UserId,
        content: String,
        kind: MessageKind,
        group_id: Option<RoomId>,
        group_title: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id,
            sender_id,
            content,
            kind,
            group_id,
            group_title,
            created_at: Utc::now(),
        }
    }
}
