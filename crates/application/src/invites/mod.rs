pub mod accept_invite;
pub mod send_invite;

#[cfg(test)]
mod use_cases_test;

pub use accept_invite::AcceptInviteUseCase;
pub use send_invite::SendGroupInviteUseCase;

use parlor_core::RoomId;
use parlor_infrastructure::RepoError;
use thiserror::Error;

use crate::messages::MessageError;
use crate::rooms::RoomError;

#[derive(Debug, Error)]
pub enum InviteError {
    #[error("only the group owner may invite")]
    NotGroupOwner,

    #[error("invites only apply to group rooms")]
    NotAGroup,

    #[error("no user with username: {0}")]
    UserNotFound(String),

    #[error("group not found: {0}")]
    GroupNotFound(RoomId),

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Message(#[from] MessageError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
