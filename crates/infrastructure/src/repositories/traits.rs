// Trait definitions for the repository pattern.
// The hosted datastore enforces uniqueness at insert time; callers recover
// from `Duplicate` by re-reading current state rather than locking up front.

use chrono::{DateTime, Utc};
use parlor_core::entities::prelude::*;
use parlor_core::{RoomId, UserId};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepoError {
    /// The backend rejected an insert or update that would violate a unique
    /// constraint (duplicate id, membership pair, or username).
    #[error("duplicate row: {0}")]
    Duplicate(String),

    #[error("row not found: {0}")]
    NotFound(String),

    /// Transport or backend failure. Fire-once semantics: not retried here.
    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &UserId) -> RepoResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
    /// Inserts a new profile row; `Duplicate` if the id already exists.
    async fn create(&self, user: User) -> RepoResult<User>;
    async fn update(&self, user: User) -> RepoResult<User>;
    /// Atomic username claim: persists `username` on the user unless a
    /// different user already holds it, in which case `Duplicate`. This is
    /// the backend's unique-constraint check, so concurrent claimants cannot
    /// both win.
    async fn set_username(&self, user_id: &UserId, username: &str) -> RepoResult<User>;
}

#[async_trait::async_trait]
pub trait FriendRepository: Send + Sync {
    async fn find_request(&self, request_id: Uuid) -> RepoResult<Option<FriendRequest>>;
    /// Most recent request from `sender` to `receiver`, any status.
    async fn latest_request_from(
        &self,
        sender: &UserId,
        receiver: &UserId,
    ) -> RepoResult<Option<FriendRequest>>;
    async fn insert_request(&self, request: FriendRequest) -> RepoResult<FriendRequest>;
    async fn update_request(&self, request: FriendRequest) -> RepoResult<FriendRequest>;
    /// Marks the request accepted and inserts the canonical friendship row
    /// as one atomic unit — an accepted request without its friendship row
    /// is an inconsistent state.
    async fn record_acceptance(&self, request: &FriendRequest) -> RepoResult<Friendship>;
    /// Order-independent existence check for the pair.
    async fn friendship_exists(&self, a: &UserId, b: &UserId) -> RepoResult<bool>;
    /// Aggregate read served backend-side in the original: all confirmed
    /// friends of `user`, joined with profile rows.
    async fn friends_of(&self, user: &UserId) -> RepoResult<Vec<User>>;
    /// Pending requests addressed to `user`.
    async fn pending_incoming(&self, user: &UserId) -> RepoResult<Vec<FriendRequest>>;
}

#[async_trait::async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_room(&self, room_id: &RoomId) -> RepoResult<Option<Room>>;
    /// Inserts a room; `Duplicate` if the id is taken (the benign DM race).
    async fn insert_room(&self, room: Room) -> RepoResult<Room>;
    /// Refreshes the denormalized room-list preview.
    async fn update_summary(
        &self,
        room_id: &RoomId,
        last_text: Option<String>,
        at: DateTime<Utc>,
    ) -> RepoResult<()>;
    /// Inserts a membership row; `Duplicate` if the (room, user) pair exists.
    async fn insert_member(&self, member: RoomMembership) -> RepoResult<()>;
    async fn delete_member(&self, room_id: &RoomId, user_id: &UserId) -> RepoResult<()>;
    async fn find_member(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> RepoResult<Option<RoomMembership>>;
    async fn members_of(&self, room_id: &RoomId) -> RepoResult<Vec<RoomMembership>>;
    /// Aggregate read served backend-side in the original: rooms the user is
    /// a member of, most recent activity first.
    async fn rooms_for_user(&self, user: &UserId) -> RepoResult<Vec<Room>>;
}

#[async_trait::async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: Message) -> RepoResult<Message>;
    /// Messages of a room ordered by insertion timestamp ascending, capped
    /// at `limit`.
    async fn list_for_room(&self, room_id: &RoomId, limit: usize) -> RepoResult<Vec<Message>>;
}
