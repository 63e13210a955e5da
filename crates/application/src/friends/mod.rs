pub mod accept_request;
pub mod dtos;
pub mod list_friends;
pub mod list_pending;
pub mod reject_request;
pub mod send_request;


pub use accept_request::AcceptFriendRequestUseCase;
pub use list_friends::ListFriendsUseCase;
pub use list_pending::ListPendingRequestsUseCase;
pub use reject_request::RejectFriendRequestUseCase;
pub use send_request::SendFriendRequestUseCase;

use parlor_core::UserId;
use parlor_infrastructure::RepoError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FriendError {
    #[error("cannot send a friend request to yourself")]
    SelfRequest,

    #[error("users are already friends")]
    AlreadyFriends,

    #[error("a request to this user is already pending")]
    RequestPending,

    /// The most recent request to this user was rejected. Not terminal:
    /// callers opt into resending via `resend_after_reject`.
    #[error("a previous request to this user was rejected")]
    PreviouslyRejected,

    #[error("only the receiver may act on a friend request")]
    NotAuthorized,

    #[error("request is no longer pending")]
    NotPending,

    #[error("friend request not found: {0}")]
    RequestNotFound(Uuid),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
