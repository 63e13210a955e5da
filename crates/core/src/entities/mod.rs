pub mod prelude;

pub mod friend_requests;
pub mod friendships;
pub mod messages;
pub mod room_members;
pub mod rooms;
pub mod users;
