// In-memory datastore implementing every repository trait. Stands in for
// the hosted backend in tests and local runs: the same unique-constraint
// rejections, the same aggregate reads, and a change feed published to the
// realtime hub after each committed write.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parlor_core::entities::prelude::*;
use parlor_core::{RoomId, UserId};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::traits::{
    FriendRepository, MessageRepository, RepoError, RepoResult, RoomRepository, UserRepository,
};
use crate::realtime::{ChangeEvent, RealtimeHub};

pub struct MemoryBackend {
    users: RwLock<HashMap<UserId, User>>,
    requests: RwLock<HashMap<Uuid, FriendRequest>>,
    friendships: RwLock<Vec<Friendship>>,
    rooms: RwLock<HashMap<RoomId, Room>>,
    members: RwLock<Vec<RoomMembership>>,
    messages: RwLock<Vec<Message>>,
    hub: RealtimeHub,
}

impl MemoryBackend {
    pub fn new(hub: RealtimeHub) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            requests: RwLock::new(HashMap::new()),
            friendships: RwLock::new(Vec::new()),
            rooms: RwLock::new(HashMap::new()),
            members: RwLock::new(Vec::new()),
            messages: RwLock::new(Vec::new()),
            hub,
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for MemoryBackend {
    async fn find_by_id(&self, user_id: &UserId) -> RepoResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn create(&self, user: User) -> RepoResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(RepoError::Duplicate(format!("users.id={}", user.id)));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> RepoResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(RepoError::NotFound(format!("users.id={}", user.id)));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn set_username(&self, user_id: &UserId, username: &str) -> RepoResult<User> {
        // Single write lock makes the uniqueness check and the assignment
        // one atomic step, like the backend's unique index would.
        let mut users = self.users.write().await;
        let taken = users
            .values()
            .any(|u| &u.id != user_id && u.username.as_deref() == Some(username));
        if taken {
            return Err(RepoError::Duplicate(format!("users.username={username}")));
        }
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| RepoError::NotFound(format!("users.id={user_id}")))?;
        user.username = Some(username.to_string());
        Ok(user.clone())
    }
}

#[async_trait::async_trait]
impl FriendRepository for MemoryBackend {
    async fn find_request(&self, request_id: Uuid) -> RepoResult<Option<FriendRequest>> {
        Ok(self.requests.read().await.get(&request_id).cloned())
    }

    async fn latest_request_from(
        &self,
        sender: &UserId,
        receiver: &UserId,
    ) -> RepoResult<Option<FriendRequest>> {
        Ok(self
            .requests
            .read()
            .await
            .values()
            .filter(|r| &r.sender_id == sender && &r.receiver_id == receiver)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn insert_request(&self, request: FriendRequest) -> RepoResult<FriendRequest> {
        let mut requests = self.requests.write().await;
        if requests.contains_key(&request.id) {
            return Err(RepoError::Duplicate(format!(
                "friend_requests.id={}",
                request.id
            )));
        }
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn update_request(&self, request: FriendRequest) -> RepoResult<FriendRequest> {
        let mut requests = self.requests.write().await;
        if !requests.contains_key(&request.id) {
            return Err(RepoError::NotFound(format!(
                "friend_requests.id={}",
                request.id
            )));
        }
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn record_acceptance(&self, request: &FriendRequest) -> RepoResult<Friendship> {
        // Both locks held for the whole step: the status flip and the
        // friendship row commit together or not at all.
        let mut requests = self.requests.write().await;
        let mut friendships = self.friendships.write().await;

        let stored = requests.get_mut(&request.id).ok_or_else(|| {
            RepoError::NotFound(format!("friend_requests.id={}", request.id))
        })?;
        stored.status = RequestStatus::Accepted;
        stored.updated_at = Utc::now();

        let (lo, hi) =
            Friendship::ordered(request.sender_id.clone(), request.receiver_id.clone());
        if let Some(existing) = friendships
            .iter()
            .find(|f| f.user1_id == lo && f.user2_id == hi)
        {
            return Ok(existing.clone());
        }
        let friendship = Friendship::link(lo, hi);
        friendships.push(friendship.clone());
        Ok(friendship)
    }

    async fn friendship_exists(&self, a: &UserId, b: &UserId) -> RepoResult<bool> {
        let (lo, hi) = Friendship::ordered(a.clone(), b.clone());
        Ok(self
            .friendships
            .read()
            .await
            .iter()
            .any(|f| f.user1_id == lo && f.user2_id == hi))
    }

    async fn friends_of(&self, user: &UserId) -> RepoResult<Vec<User>> {
        let friendships = self.friendships.read().await;
        let users = self.users.read().await;
        Ok(friendships
            .iter()
            .filter(|f| f.involves(user))
            .filter_map(|f| users.get(f.other(user)).cloned())
            .collect())
    }

    async fn pending_incoming(&self, user: &UserId) -> RepoResult<Vec<FriendRequest>> {
        let mut pending: Vec<FriendRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|r| &r.receiver_id == user && r.is_pending())
            .cloned()
            .collect();
        pending.sort_by_key(|r| r.created_at);
        Ok(pending)
    }
}

#[async_trait::async_trait]
impl RoomRepository for MemoryBackend {
    async fn find_room(&self, room_id: &RoomId) -> RepoResult<Option<Room>> {
        Ok(self.rooms.read().await.get(room_id).cloned())
    }

    async fn insert_room(&self, room: Room) -> RepoResult<Room> {
        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room.id) {
            return Err(RepoError::Duplicate(format!("rooms.id={}", room.id)));
        }
        rooms.insert(room.id.clone(), room.clone());
        Ok(room)
    }

    async fn update_summary(
        &self,
        room_id: &RoomId,
        last_text: Option<String>,
        at: DateTime<Utc>,
    ) -> RepoResult<()> {
        {
            let mut rooms = self.rooms.write().await;
            let room = rooms
                .get_mut(room_id)
                .ok_or_else(|| RepoError::NotFound(format!("rooms.id={room_id}")))?;
            room.last_text = last_text;
            room.updated_at = at;
        }
        self.hub.publish(ChangeEvent::RoomTouched {
            room_id: room_id.clone(),
        });
        Ok(())
    }

    async fn insert_member(&self, member: RoomMembership) -> RepoResult<()> {
        {
            let mut members = self.members.write().await;
            if members
                .iter()
                .any(|m| m.room_id == member.room_id && m.user_id == member.user_id)
            {
                return Err(RepoError::Duplicate(format!(
                    "room_members ({}, {})",
                    member.room_id, member.user_id
                )));
            }
            members.push(member.clone());
        }
        self.hub.publish(ChangeEvent::MemberAdded {
            room_id: member.room_id,
            user_id: member.user_id,
        });
        Ok(())
    }

    async fn delete_member(&self, room_id: &RoomId, user_id: &UserId) -> RepoResult<()> {
        {
            let mut members = self.members.write().await;
            let before = members.len();
            members.retain(|m| !(&m.room_id == room_id && &m.user_id == user_id));
            if members.len() == before {
                return Err(RepoError::NotFound(format!(
                    "room_members ({room_id}, {user_id})"
                )));
            }
        }
        self.hub.publish(ChangeEvent::MemberRemoved {
            room_id: room_id.clone(),
            user_id: user_id.clone(),
        });
        Ok(())
    }

    async fn find_member(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> RepoResult<Option<RoomMembership>> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|m| &m.room_id == room_id && &m.user_id == user_id)
            .cloned())
    }

    async fn members_of(&self, room_id: &RoomId) -> RepoResult<Vec<RoomMembership>> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .filter(|m| &m.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn rooms_for_user(&self, user: &UserId) -> RepoResult<Vec<Room>> {
        let members = self.members.read().await;
        let rooms = self.rooms.read().await;
        let mut visible: Vec<Room> = members
            .iter()
            .filter(|m| &m.user_id == user)
            .filter_map(|m| rooms.get(&m.room_id).cloned())
            .collect();
        visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(visible)
    }
}

#[async_trait::async_trait]
impl MessageRepository for MemoryBackend {
    async fn insert(&self, message: Message) -> RepoResult<Message> {
        self.messages.write().await.push(message.clone());
        self.hub.publish(ChangeEvent::MessageInserted {
            room_id: message.room_id.clone(),
            message: message.clone(),
        });
        Ok(message)
    }

    async fn list_for_room(&self, room_id: &RoomId, limit: usize) -> RepoResult<Vec<Message>> {
        let mut rows: Vec<Message> = self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| &m.room_id == room_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        rows.truncate(limit);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Backend;
    use chrono::Utc;
    use parlor_core::dm_room_id;

    fn user(id: &str) -> User {
        User {
            id: UserId::from(id),
            email: format!("{id}@example.com"),
            display_name: Some(id.to_string()),
            username: None,
            avatar_url: None,
            status: Presence::Offline,
            last_seen: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn set_username_rejects_second_claimant() {
        let (backend, _hub) = Backend::in_memory();
        backend.users.create(user("a")).await.unwrap();
        backend.users.create(user("b")).await.unwrap();

        backend
            .users
            .set_username(&UserId::from("a"), "taken")
            .await
            .unwrap();
        let err = backend
            .users
            .set_username(&UserId::from("b"), "taken")
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn duplicate_membership_is_rejected() {
        let (backend, _hub) = Backend::in_memory();
        let room_id = dm_room_id(&UserId::from("a"), &UserId::from("b"));
        let member = RoomMembership::new(room_id.clone(), UserId::from("a"), MemberRole::Member);
        backend.rooms.insert_member(member.clone()).await.unwrap();
        let err = backend.rooms.insert_member(member).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn record_acceptance_is_idempotent_for_the_pair() {
        let (backend, _hub) = Backend::in_memory();
        let req = FriendRequest::new(UserId::from("b"), UserId::from("a"));
        backend.friends.insert_request(req.clone()).await.unwrap();
        let f1 = backend.friends.record_acceptance(&req).await.unwrap();
        let f2 = backend.friends.record_acceptance(&req).await.unwrap();
        assert_eq!(f1.user1_id, f2.user1_id);
        assert!(backend
            .friends
            .friendship_exists(&UserId::from("a"), &UserId::from("b"))
            .await
            .unwrap());
    }
}
