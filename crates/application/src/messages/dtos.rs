use parlor_core::entities::prelude::{Message, MessageKind};
use parlor_core::{RoomId, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub room_id: RoomId,
    pub sender_id: UserId,
    /// Text body, or the public URL of an already-uploaded blob for file
    /// messages. The upload itself happens against object storage before
    /// this call; size is checked there.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub group_id: Option<RoomId>,
    pub group_title: Option<String>,
}

impl PostMessageRequest {
    pub fn text(room_id: RoomId, sender_id: UserId, content: impl Into<String>) -> Self {
        Self {
            room_id,
            sender_id,
            content: content.into(),
            kind: MessageKind::Text,
            group_id: None,
            group_title: None,
        }
    }

    pub fn file(room_id: RoomId, sender_id: UserId, url: impl Into<String>) -> Self {
        Self {
            room_id,
            sender_id,
            content: url.into(),
            kind: MessageKind::File,
            group_id: None,
            group_title: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListMessagesRequest {
    pub room_id: RoomId,
    pub caller_id: UserId,
    /// Falls back to the configured page limit.
    pub limit: Option<usize>,
}

/// Message enriched with sender display fields for rendering.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageDto {
    pub message_id: Uuid,
    pub room_id: RoomId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub sender_avatar_url: Option<String>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub group_id: Option<RoomId>,
    pub group_title: Option<String>,
    pub created_at: i64,
}

impl MessageDto {
    pub fn from_message(message: Message, sender_name: String, avatar: Option<String>) -> Self {
        Self {
            message_id: message.id,
            room_id: message.room_id,
            sender_id: message.sender_id,
            sender_name,
            sender_avatar_url: avatar,
            content: message.content,
            kind: message.kind,
            group_id: message.group_id,
            group_title: message.group_title,
            created_at: message.created_at.timestamp_millis(),
        }
    }
}
