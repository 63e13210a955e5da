use parlor_core::entities::prelude::{Presence, User};
use parlor_core::UserId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ClaimUsernameRequest {
    pub user_id: UserId,
    #[validate(length(min = 3, max = 32))]
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePresenceRequest {
    pub user_id: UserId,
    pub status: Presence,
}

/// Profile fields the UI renders for the signed-in user.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileDto {
    pub user_id: UserId,
    pub email: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub status: Presence,
}

impl From<User> for ProfileDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
            status: user.status,
        }
    }
}
