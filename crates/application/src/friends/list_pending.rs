use parlor_core::UserId;
use parlor_infrastructure::Backend;

use super::dtos::PendingRequestDto;
use super::FriendError;

pub struct ListPendingRequestsUseCase;

impl ListPendingRequestsUseCase {
    /// Incoming pending requests joined with each sender's profile.
    pub async fn execute(
        backend: &Backend,
        user_id: &UserId,
    ) -> Result<Vec<PendingRequestDto>, FriendError> {
        let pending = backend.friends.pending_incoming(user_id).await?;

        let mut rows = Vec::with_capacity(pending.len());
        for request in pending {
            let sender = backend.users.find_by_id(&request.sender_id).await?;
            let (username, display_name, avatar_url) = match sender {
                Some(u) => (u.username, u.display_name, u.avatar_url),
                None => (None, None, None),
            };
            rows.push(PendingRequestDto {
                request_id: request.id,
                sender_id: request.sender_id,
                sender_username: username,
                sender_display_name: display_name,
                sender_avatar_url: avatar_url,
                created_at: request.created_at.timestamp(),
            });
        }
        Ok(rows)
    }
}
