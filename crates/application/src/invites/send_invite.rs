use parlor_core::entities::prelude::MessageKind;
use parlor_core::{RoomId, UserId};
use parlor_infrastructure::Backend;

use super::InviteError;
use crate::identity::normalize_username;
use crate::messages::dtos::PostMessageRequest;
use crate::messages::PostMessageUseCase;
use crate::rooms::StartDmUseCase;
use crate::Config;

pub struct SendGroupInviteUseCase;

impl SendGroupInviteUseCase {
    /// Delivers a group invite as an invite-kind message through the DM
    /// room between inviter and invitee, resolving or creating that DM
    /// first. Owner-only, and subject to the DM friendship gate.
    pub async fn execute(
        backend: &Backend,
        config: &Config,
        group_id: &RoomId,
        inviter_id: &UserId,
        invitee_username: &str,
    ) -> Result<(), InviteError> {
        let group = backend
            .rooms
            .find_room(group_id)
            .await?
            .ok_or_else(|| InviteError::GroupNotFound(group_id.clone()))?;
        if !group.is_group() {
            return Err(InviteError::NotAGroup);
        }
        if &group.created_by != inviter_id {
            return Err(InviteError::NotGroupOwner);
        }

        let username = normalize_username(invitee_username);
        let invitee = backend
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| InviteError::UserNotFound(username.clone()))?;

        let dm = StartDmUseCase::execute(backend, inviter_id, &invitee.id).await?;

        PostMessageUseCase::execute(
            backend,
            config,
            PostMessageRequest {
                room_id: dm.id,
                sender_id: inviter_id.clone(),
                content: "invite".to_string(),
                kind: MessageKind::Invite,
                group_id: Some(group.id.clone()),
                group_title: Some(group.title.clone()),
            },
        )
        .await?;

        tracing::info!(group = %group.id, invitee = %invitee.id, "group invite sent");
        Ok(())
    }
}
