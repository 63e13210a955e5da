pub mod entities;
pub mod ids;

pub use ids::{dm_room_id, RoomId, UserId};
