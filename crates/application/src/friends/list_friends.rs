use parlor_core::UserId;
use parlor_infrastructure::Backend;

use super::dtos::FriendDto;
use super::FriendError;

pub struct ListFriendsUseCase;

impl ListFriendsUseCase {
    /// Confirmed friends joined with profile fields for display, sorted by
    /// visible name.
    pub async fn execute(backend: &Backend, user_id: &UserId) -> Result<Vec<FriendDto>, FriendError> {
        let mut friends = backend.friends.friends_of(user_id).await?;
        friends.sort_by(|a, b| a.visible_name().cmp(b.visible_name()));

        Ok(friends
            .into_iter()
            .map(|user| FriendDto {
                last_seen: user.last_seen.map(|t| t.timestamp()),
                user_id: user.id,
                username: user.username,
                display_name: user.display_name,
                avatar_url: user.avatar_url,
                status: user.status,
            })
            .collect())
    }
}
