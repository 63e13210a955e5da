pub mod dtos;
pub mod list_messages;
pub mod post_message;


pub use list_messages::ListMessagesUseCase;
pub use post_message::PostMessageUseCase;

use parlor_core::RoomId;
use parlor_infrastructure::RepoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageError {
    /// Membership is the sole authorization for reading or posting.
    #[error("sender is not a member of the room")]
    NotAMember,

    #[error("message content must not be blank")]
    EmptyContent,

    /// An invite message must reference a group distinct from the room it
    /// is delivered in.
    #[error("invite message must reference a different room")]
    InvalidInvite,

    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
