use chrono::Utc;
use parlor_core::entities::prelude::RequestStatus;
use parlor_core::UserId;
use parlor_infrastructure::Backend;
use uuid::Uuid;

use super::FriendError;

pub struct RejectFriendRequestUseCase;

impl RejectFriendRequestUseCase {
    /// Receiver-only; rejected is terminal for this request row.
    pub async fn execute(
        backend: &Backend,
        request_id: Uuid,
        caller_id: &UserId,
    ) -> Result<(), FriendError> {
        let mut request = backend
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

        request.status = RequestStatus::Rejected;
        request.updated_at = Utc::now();
        backend.friends.update_request(request).await?;
        Ok(())
    }
}
