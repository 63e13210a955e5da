// Auth-provider collaborator. Sign-in itself (OAuth redirect and session
// storage) happens outside this crate; the service layer only needs the
// stable principal the provider vouches for.

use parlor_core::UserId;
use thiserror::Error;
use tokio::sync::RwLock;

/// The authenticated identity returned by the external auth provider,
/// carrying the metadata the first-login profile row is seeded from.
#[derive(Clone, Debug, PartialEq)]
pub struct Principal {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no active session")]
    NotSignedIn,

    #[error("auth provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolves the current session to a principal.
    async fn authenticate(&self) -> Result<Principal, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Fixture provider holding a pre-established session.
pub struct StaticAuthProvider {
    session: RwLock<Option<Principal>>,
}

impl StaticAuthProvider {
    pub fn signed_in(principal: Principal) -> Self {
        Self {
            session: RwLock::new(Some(principal)),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn authenticate(&self) -> Result<Principal, AuthError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(AuthError::NotSignedIn)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.session.write().await.take();
        Ok(())
    }
}
