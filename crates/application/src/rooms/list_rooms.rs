use parlor_core::UserId;
use parlor_infrastructure::Backend;

use super::dtos::RoomSummaryDto;
use super::RoomError;

pub struct ListRoomsUseCase;

impl ListRoomsUseCase {
    /// The user's visible room list: exactly the rooms a membership row
    /// exists for, most recent activity first.
    pub async fn execute(
        backend: &Backend,
        user_id: &UserId,
    ) -> Result<Vec<RoomSummaryDto>, RoomError> {
        let rooms = backend.rooms.rooms_for_user(user_id).await?;
        Ok(rooms
            .into_iter()
            .map(|room| RoomSummaryDto {
                room_id: room.id,
                kind: room.kind,
                title: room.title,
                avatar_url: room.avatar_url,
                last_text: room.last_text,
                updated_at: room.updated_at.timestamp(),
            })
            .collect())
    }
}
