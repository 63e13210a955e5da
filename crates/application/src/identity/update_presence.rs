use chrono::Utc;
use parlor_infrastructure::Backend;

use super::dtos::UpdatePresenceRequest;
use super::IdentityError;

pub struct UpdatePresenceUseCase;

impl UpdatePresenceUseCase {
    /// Sets the user's presence status and bumps `last_seen`.
    pub async fn execute(
        backend: &Backend,
        req: UpdatePresenceRequest,
    ) -> Result<(), IdentityError> {
        let mut user = backend
            .users
            .find_by_id(&req.user_id)
            .await?
            .ok_or_else(|| IdentityError::UserNotFound(req.user_id.clone()))?;

        user.status = req.status;
        user.last_seen = Some(Utc::now());
        backend.users.update(user).await?;
        Ok(())
    }
}
