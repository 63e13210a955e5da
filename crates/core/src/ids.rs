use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier assigned by the external auth provider.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

/// Room identifier. Deterministic `dm_<a>_<b>` for direct rooms,
/// generated UUID string for group rooms.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn generate() -> Self {
        RoomId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId(s.to_string())
    }
}

/// Canonical direct-room id for a pair of users: the two ids sorted
/// lexicographically and joined under a `dm_` prefix. Symmetric, so lookup
/// and creation agree on the id regardless of which side calls first.
pub fn dm_room_id(a: &UserId, b: &UserId) -> RoomId {
    let (lo, hi) = if a.0 <= b.0 { (a, b) } else { (b, a) };
    RoomId(format!("dm_{}_{}", lo.0, hi.0))
}
