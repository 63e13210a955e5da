// Repository pattern over the external datastore's named relations.
// The hosted backend is reached through these traits only, so the service
// layer can run against an in-memory substitute in tests.

pub mod memory;
pub mod traits;

use std::sync::Arc;

use crate::realtime::RealtimeHub;
use traits::{FriendRepository, MessageRepository, RoomRepository, UserRepository};

/// The backend collaborator bundle handed to every use case. Replaces the
/// original system's ambient global client handle with an explicitly passed
/// object.
#[derive(Clone)]
pub struct Backend {
    pub users: Arc<dyn UserRepository>,
    pub friends: Arc<dyn FriendRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl Backend {
    /// Backend over a fresh in-memory datastore, plus the hub its change
    /// feed publishes to.
    pub fn in_memory() -> (Self, RealtimeHub) {
        let hub = RealtimeHub::new(256);
        let store = Arc::new(memory::MemoryBackend::new(hub.clone()));
        let backend = Self {
            users: store.clone(),
            friends: store.clone(),
            rooms: store.clone(),
            messages: store,
        };
        (backend, hub)
    }
}
