use parlor_core::{RoomId, UserId};
use parlor_infrastructure::{Backend, RepoError};

use super::RoomError;

pub struct RemoveMemberUseCase;

impl RemoveMemberUseCase {
    /// Deletes the membership row only; the room and its messages persist.
    /// Allowed for the owner removing someone else, or a user removing
    /// themself (leaving).
    pub async fn execute(
        backend: &Backend,
        room_id: &RoomId,
        user_id: &UserId,
        actor_id: &UserId,
    ) -> Result<(), RoomError> {
        let room = backend
            .rooms
            .find_room(room_id)
            .await?
            .ok_or_else(|| RoomError::RoomNotFound(room_id.clone()))?;

        let leaving_self = actor_id == user_id;
        let owner_removing = &room.created_by == actor_id;
        if !leaving_self && !owner_removing {
            return Err(RoomError::NotAuthorized);
        }

        match backend.rooms.delete_member(room_id, user_id).await {
            Ok(()) => {
                tracing::debug!(room = %room_id, user = %user_id, "membership removed");
                Ok(())
            }
            Err(RepoError::NotFound(_)) => Err(RoomError::NotAMember),
            Err(e) => Err(e.into()),
        }
    }
}
