pub use super::friend_requests::{FriendRequest, RequestStatus};
pub use super::friendships::Friendship;
pub use super::messages::{Message, MessageKind};
pub use super::room_members::{MemberRole, RoomMembership};
pub use super::rooms::{Room, RoomKind};
pub use super::users::{Presence, User};
