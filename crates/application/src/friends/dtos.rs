use parlor_core::entities::prelude::Presence;
use parlor_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct SendFriendRequest {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    /// Policy knob: a rejected previous request blocks resending unless the
    /// caller sets this.
    #[serde(default)]
    pub resend_after_reject: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FriendDto {
    pub user_id: UserId,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub status: Presence,
    pub last_seen: Option<i64>,
}

/// Incoming pending request joined with the sender's profile for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct PendingRequestDto {
    pub request_id: Uuid,
    pub sender_id: UserId,
    pub sender_username: Option<String>,
    pub sender_display_name: Option<String>,
    pub sender_avatar_url: Option<String>,
    pub created_at: i64,
}
