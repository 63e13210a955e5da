use parlor_core::entities::prelude::{FriendRequest, RequestStatus};
use parlor_infrastructure::Backend;

use super::dtos::SendFriendRequest;
use super::FriendError;

pub struct SendFriendRequestUseCase;

impl SendFriendRequestUseCase {
    pub async fn execute(
        backend: &Backend,
        req: SendFriendRequest,
    ) -> Result<FriendRequest, FriendError> {
        if req.sender_id == req.receiver_id {
            return Err(FriendError::SelfRequest);
        }

        backend
            .users
            .find_by_id(&req.receiver_id)
            .await?
            .ok_or_else(|| FriendError::UserNotFound(req.receiver_id.clone()))?;

        // Order-independent: a friendship for the pair blocks a new request
        // no matter which side originally asked.
        if backend
            .friends
            .friendship_exists(&req.sender_id, &req.receiver_id)
            .await?
        {
            return Err(FriendError::AlreadyFriends);
        }

        if let Some(previous) = backend
            .friends
            .latest_request_from(&req.sender_id, &req.receiver_id)
            .await?
        {
            match previous.status {
                RequestStatus::Pending => return Err(FriendError::RequestPending),
                RequestStatus::Rejected if !req.resend_after_reject => {
                    return Err(FriendError::PreviouslyRejected)
                }
                _ => {}
            }
        }

        let request = backend
            .friends
            .insert_request(FriendRequest::new(req.sender_id, req.receiver_id))
            .await?;
        tracing::debug!(request = %request.id, "friend request sent");
        Ok(request)
    }
}
