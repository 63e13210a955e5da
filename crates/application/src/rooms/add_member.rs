use parlor_core::entities::prelude::{MemberRole, RoomMembership};
use parlor_core::{RoomId, UserId};
use parlor_infrastructure::{Backend, RepoError};

use super::RoomError;

pub struct AddMemberUseCase;

impl AddMemberUseCase {
    /// Owner-gated membership insert. Invite acceptance is the one path
    /// that bypasses this gate (see the invites component).
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

        if &room.created_by != actor_id {
            return Err(RoomError::NotAuthorized);
        }

        if backend.rooms.find_member(room_id, user_id).await?.is_some() {
            return Err(RoomError::AlreadyMember);
        }

        let row = RoomMembership::new(room_id.clone(), user_id.clone(), MemberRole::Member);
        match backend.rooms.insert_member(row).await {
            Ok(()) => Ok(()),
            Err(RepoError::Duplicate(_)) => Err(RoomError::AlreadyMember),
            Err(e) => Err(e.into()),
        }
    }
}
