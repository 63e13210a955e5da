use parlor_core::entities::prelude::Friendship;
use parlor_core::UserId;
use parlor_infrastructure::Backend;
use uuid::Uuid;

use super::FriendError;

pub struct AcceptFriendRequestUseCase;

impl AcceptFriendRequestUseCase {
    /// Receiver-only. The status flip and the canonical friendship row are
    /// written as one unit by the backend, so an accepted request can never
    /// exist without its friendship.
    pub async fn execute(
        backend: &Backend,
        request_id: Uuid,
        caller_id: &UserId,
    ) -> Result<Friendship, FriendError> {
        let request = backend
            .friends
            .find_request(request_id)
            .await?
            .ok_or(FriendError::RequestNotFound(request_id))?;

        if &request.receiver_id != caller_id {
            return Err(FriendError::NotAuthorized);
        }
        if !request.is_pending() {
            return Err(FriendError::NotPending);
        }

        let friendship = backend.friends.record_acceptance(&request).await?;
        tracing::info!(
            user1 = %friendship.user1_id,
            user2 = %friendship.user2_id,
            "friend request accepted"
        );
        Ok(friendship)
    }
}
