use chrono::Utc;
use parlor_core::entities::prelude::{Message, MessageKind};
use parlor_infrastructure::Backend;

use super::dtos::PostMessageRequest;
use super::MessageError;
use crate::Config;

pub struct PostMessageUseCase;

impl PostMessageUseCase {
    /// Appends a message and refreshes the room's denormalized preview.
    /// History is append-only, so a failed preview update is repaired by
    /// retrying the update, never by rolling the message back.
    pub async fn execute(
        backend: &Backend,
        config: &Config,
        req: PostMessageRequest,
    ) -> Result<Message, MessageError> {
        let room = backend
            .rooms
            .find_room(&req.room_id)
            .await?
            .ok_or_else(|| MessageError::RoomNotFound(req.room_id.clone()))?;

        if backend
            .rooms
            .find_member(&req.room_id, &req.sender_id)
            .await?
            .is_none()
        {
            return Err(MessageError::NotAMember);
        }

        let message = match req.kind {
            MessageKind::Text => {
                if req.content.trim().is_empty() {
                    return Err(MessageError::EmptyContent);
                }
                Message::text(req.room_id.clone(), req.sender_id, req.content)
            }
            MessageKind::File => Message::file(req.room_id.clone(), req.sender_id, req.content),
            MessageKind::Invite => {
                // Invites travel through a DM and point at a group elsewhere.
                let group_id = req.group_id.ok_or(MessageError::InvalidInvite)?;
                if room.is_group() || group_id == req.room_id {
                    return Err(MessageError::InvalidInvite);
                }
                let target = backend
                    .rooms
                    .find_room(&group_id)
                    .await?
                    .ok_or(MessageError::InvalidInvite)?;
                if !target.is_group() {
                    return Err(MessageError::InvalidInvite);
                }
                Message::invite(
                    req.room_id.clone(),
                    req.sender_id,
                    group_id,
                    req.group_title.unwrap_or(target.title),
                )
            }
        };

        let stored = backend.messages.insert(message).await?;

        let preview = match stored.kind {
            MessageKind::Text => stored.content.clone(),
            MessageKind::File => "[file]".to_string(),
            MessageKind::Invite => "invite".to_string(),
        };

        // Keep the room-list preview in step with the log. Attempts are
        // bounded; if they all fail the caller sees the failure but the
        // message stays.
        let mut last_err = None;
        for attempt in 1..=config.summary_repair_attempts {
            match backend
                .rooms
                .update_summary(&stored.room_id, Some(preview.clone()), Utc::now())
                .await
            {
                Ok(()) => {
                    last_err = None;
                    break;
                }
                Err(e) => {
                    tracing::warn!(room = %stored.room_id, attempt, "summary update failed: {e}");
                    last_err = Some(e);
                }
            }
        }
        if let Some(e) = last_err {
            return Err(e.into());
        }

        Ok(stored)
    }
}
