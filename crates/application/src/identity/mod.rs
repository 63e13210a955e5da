pub mod claim_username;
pub mod dtos;
pub mod ensure_profile;
pub mod update_presence;
mod validation;


pub use claim_username::ClaimUsernameUseCase;
pub use ensure_profile::EnsureProfileUseCase;
pub use update_presence::UpdatePresenceUseCase;
pub use validation::{normalize_username, USERNAME_REGEX};

use parlor_core::UserId;
use parlor_infrastructure::RepoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("username must be 3-32 lowercase letters, digits or underscores")]
    InvalidFormat,

    #[error("username is already taken")]
    AlreadyTaken,

    /// The user already holds a different username. No rename or vacate
    /// operation exists, so a claim is a one-time transition.
    #[error("username has already been claimed for this account")]
    AlreadyClaimed,

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
