use parlor_core::entities::prelude::{MemberRole, RoomMembership};
use parlor_core::{RoomId, UserId};
use parlor_infrastructure::{Backend, RepoError};

use super::InviteError;

pub struct AcceptInviteUseCase;

impl AcceptInviteUseCase {
    /// Self-service join: accepting an invite is the one case where a
    /// non-owner adds themself to a group. Already being a member counts as
    /// success.
    pub async fn execute(
        backend: &Backend,
        group_id: &RoomId,
        user_id: &UserId,
    ) -> Result<(), InviteError> {
        let group = backend
            .rooms
            .find_room(group_id)
            .await?
            .ok_or_else(|| InviteError::GroupNotFound(group_id.clone()))?;
        if !group.is_group() {
            return Err(InviteError::NotAGroup);
        }

        let row = RoomMembership::new(group.id, user_id.clone(), MemberRole::Member);
        match backend.rooms.insert_member(row).await {
            Ok(()) | Err(RepoError::Duplicate(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
