use parlor_infrastructure::RepoError;
use thiserror::Error;

use crate::friends::FriendError;
use crate::identity::IdentityError;
use crate::invites::InviteError;
use crate::messages::MessageError;
use crate::rooms::RoomError;

/// Application-level error taxonomy. Component operations return their own
/// error enums; this is the shared surface a transport maps to a response.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input format (400). Reported immediately, never retried.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Permission denied (403). Always terminal.
    #[error("not authorized: {0}")]
    Authorization(String),

    /// Unknown user/room/request (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate username/room/membership (409). Callers usually recover by
    /// re-reading and treating the existing record as the result; only true
    /// identity conflicts reach the end user.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Transport or backend failure (500). Fire-once: the caller re-submits
    /// manually, nothing retries here.
    #[error("backend failure: {0}")]
    Transient(#[source] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::Authorization(_) => 403,
            AppError::NotFound(_) => 404,
            AppError::Conflict(_) => 409,
            AppError::Transient(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Authorization(_) => "AUTHORIZATION_FAILED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Transient(_) => "BACKEND_ERROR",
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(what) => AppError::Conflict(what),
            RepoError::NotFound(what) => AppError::NotFound(what),
            RepoError::Backend(e) => AppError::Transient(e),
        }
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::InvalidFormat => AppError::Validation(err.to_string()),
            IdentityError::AlreadyTaken | IdentityError::AlreadyClaimed => {
                AppError::Conflict(err.to_string())
            }
            IdentityError::UserNotFound(_) => AppError::NotFound(err.to_string()),
            IdentityError::Repo(e) => e.into(),
        }
    }
}

impl From<FriendError> for AppError {
    fn from(err: FriendError) -> Self {
        match err {
            FriendError::SelfRequest => AppError::Validation(err.to_string()),
            FriendError::AlreadyFriends
            | FriendError::RequestPending
            | FriendError::PreviouslyRejected
            | FriendError::NotPending => AppError::Conflict(err.to_string()),
            FriendError::NotAuthorized => AppError::Authorization(err.to_string()),
            FriendError::RequestNotFound(_) | FriendError::UserNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            FriendError::Repo(e) => e.into(),
        }
    }
}

impl From<RoomError> for AppError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::EmptyTitle | RoomError::NoMembers => AppError::Validation(err.to_string()),
            RoomError::NotFriends | RoomError::NotAuthorized | RoomError::NotAMember => {
                AppError::Authorization(err.to_string())
            }
            RoomError::AlreadyMember => AppError::Conflict(err.to_string()),
            RoomError::RoomNotFound(_) | RoomError::UserNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            RoomError::Repo(e) => e.into(),
        }
    }
}

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::EmptyContent | MessageError::InvalidInvite => {
                AppError::Validation(err.to_string())
            }
            MessageError::NotAMember => AppError::Authorization(err.to_string()),
            MessageError::RoomNotFound(_) => AppError::NotFound(err.to_string()),
            MessageError::Repo(e) => e.into(),
        }
    }
}

impl From<InviteError> for AppError {
    fn from(err: InviteError) -> Self {
        match err {
            InviteError::NotGroupOwner => AppError::Authorization(err.to_string()),
            InviteError::NotAGroup => AppError::Validation(err.to_string()),
            InviteError::UserNotFound(_) | InviteError::GroupNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            InviteError::Room(e) => e.into(),
            InviteError::Message(e) => e.into(),
            InviteError::Repo(e) => e.into(),
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::RoomId;

    #[test]
    fn taxonomy_maps_to_status_codes() {
        assert_eq!(AppError::from(IdentityError::InvalidFormat).status_code(), 400);
        assert_eq!(AppError::from(IdentityError::AlreadyTaken).status_code(), 409);
        assert_eq!(AppError::from(FriendError::NotAuthorized).status_code(), 403);
        assert_eq!(AppError::from(MessageError::NotAMember).status_code(), 403);
        assert_eq!(
            AppError::from(RoomError::RoomNotFound(RoomId::from("missing"))).status_code(),
            404
        );
        assert_eq!(
            AppError::from(InviteError::UserNotFound("ghost".into())).status_code(),
            404
        );
    }

    #[test]
    fn repo_duplicate_surfaces_as_conflict() {
        let err = AppError::from(RepoError::Duplicate("users.username=x".into()));
        assert_eq!(err.error_code(), "CONFLICT");
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn nested_invite_errors_keep_their_class() {
        let err = AppError::from(InviteError::Room(RoomError::NotFriends));
        assert_eq!(err.status_code(), 403);
        let err = AppError::from(InviteError::Message(MessageError::EmptyContent));
        assert_eq!(err.status_code(), 400);
    }
}
