use chrono::Utc;
use parlor_core::entities::prelude::{MemberRole, Room, RoomKind, RoomMembership};
use parlor_core::RoomId;
use parlor_infrastructure::{Backend, RepoError};

use super::dtos::CreateGroupRequest;
use super::RoomError;

pub struct CreateGroupUseCase;

impl CreateGroupUseCase {
    pub async fn execute(backend: &Backend, req: CreateGroupRequest) -> Result<Room, RoomError> {
        let title = req.title.trim();
        if title.is_empty() {
            return Err(RoomError::EmptyTitle);
        }

        let mut members: Vec<_> = req
            .member_ids
            .iter()
            .filter(|id| **id != req.owner_id)
            .cloned()
            .collect();
        members.sort();
        members.dedup();
        if members.is_empty() {
            return Err(RoomError::NoMembers);
        }

        let now = Utc::now();
        let room = backend
            .rooms
            .insert_room(Room {
                id: RoomId::generate(),
                kind: RoomKind::Group,
                title: title.to_string(),
                avatar_url: None,
                created_by: req.owner_id.clone(),
                last_text: None,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let owner_row =
            RoomMembership::new(room.id.clone(), req.owner_id.clone(), MemberRole::Owner);
        backend.rooms.insert_member(owner_row).await?;

        for user_id in members {
            let row = RoomMembership::new(room.id.clone(), user_id, MemberRole::Member);
            match backend.rooms.insert_member(row).await {
                Ok(()) | Err(RepoError::Duplicate(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(room = %room.id, owner = %req.owner_id, "created group");
        Ok(room)
    }
}
