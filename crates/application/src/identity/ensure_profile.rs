use chrono::Utc;
use parlor_core::entities::prelude::{Presence, User};
use parlor_infrastructure::auth::Principal;
use parlor_infrastructure::{Backend, RepoError};

use super::IdentityError;

pub struct EnsureProfileUseCase;

impl EnsureProfileUseCase {
    /// Resolves the authenticated principal to a profile row, creating one
    /// seeded from provider metadata on first login. Idempotent: safe to
    /// call on every session start, including two sessions racing on the
    /// first one.
    pub async fn execute(backend: &Backend, principal: &Principal) -> Result<User, IdentityError> {
        if let Some(existing) = backend.users.find_by_id(&principal.id).await? {
            return Ok(existing);
        }

        let profile = User {
            id: principal.id.clone(),
            email: principal.email.clone(),
            display_name: principal.display_name.clone(),
            username: None,
            avatar_url: principal.avatar_url.clone(),
            status: Presence::Online,
            last_seen: Some(Utc::now()),
            created_at: Utc::now(),
        };

        match backend.users.create(profile).await {
            Ok(created) => {
                tracing::info!(user = %created.id, "created profile on first login");
                Ok(created)
            }
            // A concurrent session start won the insert; the existing row is
            // the result.
            Err(RepoError::Duplicate(_)) => {
                let existing = backend
                    .users
                    .find_by_id(&principal.id)
                    .await?
                    .ok_or_else(|| IdentityError::UserNotFound(principal.id.clone()))?;
                Ok(existing)
            }
            Err(e) => Err(e.into()),
        }
    }
}
