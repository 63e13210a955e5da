pub mod add_member;
pub mod create_group;
pub mod dtos;
pub mod list_rooms;
pub mod remove_member;
pub mod start_dm;


pub use add_member::AddMemberUseCase;
pub use create_group::CreateGroupUseCase;
pub use list_rooms::ListRoomsUseCase;
pub use remove_member::RemoveMemberUseCase;
pub use start_dm::StartDmUseCase;

use parlor_core::{RoomId, UserId};
use parlor_infrastructure::RepoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("group title must not be blank")]
    EmptyTitle,

    #[error("a group needs at least one member besides the owner")]
    NoMembers,

    /// Strictest observed policy: a DM requires a confirmed friendship.
    #[error("users are not friends")]
    NotFriends,

    #[error("only the room owner may do that")]
    NotAuthorized,

    #[error("user is already a member of the room")]
    AlreadyMember,

    #[error("user is not a member of the room")]
    NotAMember,

    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
