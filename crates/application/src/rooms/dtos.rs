use parlor_core::entities::prelude::RoomKind;
use parlor_core::{RoomId, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 80))]
    pub title: String,
    pub owner_id: UserId,
    /// Members besides the owner; the owner row is added implicitly.
    pub member_ids: Vec<UserId>,
}

/// Room-list entry: the room plus its denormalized preview.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub room_id: RoomId,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub title: String,
    pub avatar_url: Option<String>,
    pub last_text: Option<String>,
    pub updated_at: i64,
}
