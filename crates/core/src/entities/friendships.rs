use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmed friendship between two users, stored once per pair with the ids
/// in canonical (lexicographic) order so the same pair can never produce two
/// rows. Only created by accepting a friend request; never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    pub user1_id: UserId,
    pub user2_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Builds the row with the pair in canonical order regardless of the
    /// order the caller passes.
    pub fn link(a: UserId, b: UserId) -> Self {
        let (user1_id, user2_id) = Self::ordered(a, b);
        Self {
            user1_id,
            user2_id,
            created_at: Utc::now(),
        }
    }

    /// Canonical ordering for a pair of ids: lexicographically sorted.
    pub fn ordered(a: UserId, b: UserId) -> (UserId, UserId) {
        if a.0 <= b.0 {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn involves(&self, user: &UserId) -> bool {
        &self.user1_id == user || &self.user2_id == user
    }

    /// The member of the pair that is not `user`.
    pub fn other(&self, user: &UserId) -> &UserId {
        if &self.user1_id == user {
            &self.user2_id
        } else {
            &self.user1_id
        }
    }
}
