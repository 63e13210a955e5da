use chrono::Utc;
use parlor_core::entities::prelude::{MemberRole, Room, RoomKind, RoomMembership};
use parlor_core::{dm_room_id, UserId};
use parlor_infrastructure::{Backend, RepoError};

use super::RoomError;

pub struct StartDmUseCase;

impl StartDmUseCase {
    /// Resolves or creates the DM room between `caller` and `peer`. The room
    /// id is derived from the sorted pair, so two racing calls converge on
    /// the same row: the loser's insert comes back `Duplicate` and the
    /// existing room wins.
    pub async fn execute(
        backend: &Backend,
        caller: &UserId,
        peer: &UserId,
    ) -> Result<Room, RoomError> {
        if !backend.friends.friendship_exists(caller, peer).await? {
            return Err(RoomError::NotFriends);
        }

        let peer_profile = backend
            .users
            .find_by_id(peer)
            .await?
            .ok_or_else(|| RoomError::UserNotFound(peer.clone()))?;

        let room_id = dm_room_id(caller, peer);
        let room = match backend.rooms.find_room(&room_id).await? {
            Some(existing) => existing,
            None => {
                let now = Utc::now();
                let candidate = Room {
                    id: room_id.clone(),
                    kind: RoomKind::Dm,
                    title: peer_profile.visible_name().to_string(),
                    avatar_url: peer_profile.avatar_url.clone(),
                    created_by: caller.clone(),
                    last_text: None,
                    created_at: now,
                    updated_at: now,
                };
                match backend.rooms.insert_room(candidate).await {
                    Ok(created) => {
                        tracing::info!(room = %created.id, "created dm room");
                        created
                    }
                    Err(RepoError::Duplicate(_)) => backend
                        .rooms
                        .find_room(&room_id)
                        .await?
                        .ok_or(RoomError::RoomNotFound(room_id.clone()))?,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        // Membership rows are idempotent for the same reason: the second
        // writer's duplicate insert means the row is already there.
        for user in [caller, peer] {
            let member = RoomMembership::new(room.id.clone(), user.clone(), MemberRole::Member);
            match backend.rooms.insert_member(member).await {
                Ok(()) | Err(RepoError::Duplicate(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(room)
    }
}
