use parlor_core::entities::prelude::User;
use parlor_infrastructure::{Backend, RepoError};

use super::dtos::ClaimUsernameRequest;
use super::validation::{normalize_username, USERNAME_REGEX};
use super::IdentityError;

pub struct ClaimUsernameUseCase;

impl ClaimUsernameUseCase {
    /// One-time username claim. The candidate is lowercased before the
    /// format and uniqueness checks; under concurrent claims of the same
    /// name only one caller wins and the rest observe `AlreadyTaken`.
    pub async fn execute(
        backend: &Backend,
        req: ClaimUsernameRequest,
    ) -> Result<User, IdentityError> {
        let candidate = normalize_username(&req.username);
        if !USERNAME_REGEX.is_match(&candidate) {
            return Err(IdentityError::InvalidFormat);
        }

        let user = backend
            .users
            .find_by_id(&req.user_id)
            .await?
            .ok_or_else(|| IdentityError::UserNotFound(req.user_id.clone()))?;

        match user.username.as_deref() {
            // Re-claiming the name already held is a no-op success.
            Some(current) if current == candidate => return Ok(user),
            Some(_) => return Err(IdentityError::AlreadyClaimed),
            None => {}
        }

        match backend.users.set_username(&req.user_id, &candidate).await {
            Ok(updated) => {
                tracing::info!(user = %updated.id, username = %candidate, "username claimed");
                Ok(updated)
            }
            Err(RepoError::Duplicate(_)) => Err(IdentityError::AlreadyTaken),
            Err(e) => Err(e.into()),
        }
    }
}
