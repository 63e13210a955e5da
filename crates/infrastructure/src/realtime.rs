// Change feed published by the backend after committed writes. Delivery is
// at-least-once and arrival order is not guaranteed to match insertion
// order, so consumers re-sort and deduplicate.

use std::collections::HashSet;

use parlor_core::entities::prelude::Message;
use parlor_core::{RoomId, UserId};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Row-change notification fanned out to subscribers.
#[derive(Clone, Debug)]
pub enum ChangeEvent {
    MessageInserted { room_id: RoomId, message: Message },
    /// The room's denormalized summary changed; subscribers re-fetch it.
    RoomTouched { room_id: RoomId },
    MemberAdded { room_id: RoomId, user_id: UserId },
    MemberRemoved { room_id: RoomId, user_id: UserId },
}

impl ChangeEvent {
    pub fn room_id(&self) -> &RoomId {
        match self {
            ChangeEvent::MessageInserted { room_id, .. }
            | ChangeEvent::RoomTouched { room_id }
            | ChangeEvent::MemberAdded { room_id, .. }
            | ChangeEvent::MemberRemoved { room_id, .. } => room_id,
        }
    }
}

/// Broadcast hub the backend publishes into. Subscribing yields an
/// independent receiver; events published with no receivers are dropped,
/// matching a push channel nobody is listening on.
#[derive(Clone)]
pub struct RealtimeHub {
    tx: broadcast::Sender<ChangeEvent>,
}

impl RealtimeHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: ChangeEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("change event dropped: no subscribers");
        }
    }
}

/// View state for one open room, fed from the change feed by a single
/// consumer loop. Appends arriving messages, drops duplicates from
/// at-least-once delivery, and re-sorts by insertion timestamp since network
/// arrival order is not trustworthy.
pub struct RoomFeed {
    room_id: RoomId,
    messages: Vec<Message>,
    seen: HashSet<Uuid>,
}

impl RoomFeed {
    /// Starts from an initial fetch of the room's history.
    pub fn new(room_id: RoomId, initial: Vec<Message>) -> Self {
        let seen = initial.iter().map(|m| m.id).collect();
        let mut feed = Self {
            room_id,
            messages: initial,
            seen,
        };
        feed.resort();
        feed
    }

    /// Applies one event; returns true when the view changed.
    pub fn apply(&mut self, event: &ChangeEvent) -> bool {
        match event {
            ChangeEvent::MessageInserted { room_id, message } if room_id == &self.room_id => {
                if !self.seen.insert(message.id) {
                    return false;
                }
                self.messages.push(message.clone());
                self.resort();
                true
            }
            _ => false,
        }
    }

    /// Single-threaded dispatch loop: consumes the feed until the channel
    /// closes. Lagged receivers skip ahead; the dropped events are only
    /// duplicates or messages a re-fetch would restore.
    pub async fn run(&mut self, mut rx: broadcast::Receiver<ChangeEvent>) {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    self.apply(&event);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, room = %self.room_id, "change feed lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn resort(&mut self) {
        self.messages
            .sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    }
}
