//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`ChangeEvent`]s. It is
//! owned by the process and shared via `Arc<EventBus>`. A subscription
//! lives exactly as long as the receiver returned by
//! [`EventBus::subscribe`]; dropping the receiver unsubscribes.

use chrono::{DateTime, Utc};
use quillboard_core::types::{DbId, UserId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// What kind of write happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
    Reordered,
}

/// A successful mutation of persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Entity kind, e.g. `"Chapter"`.
    pub entity: String,

    /// The mutated record, or the parent for reorders.
    pub entity_id: Option<DbId>,

    pub action: ChangeAction,

    /// The user whose request caused the change.
    pub actor_user_id: Option<UserId>,

    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(entity: impl Into<String>, action: ChangeAction) -> Self {
        Self {
            entity: entity.into(),
            entity_id: None,
            action,
            actor_user_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: DbId) -> Self {
        self.entity_id = Some(id);
        self
    }

    pub fn with_actor(mut self, user_id: impl Into<UserId>) -> Self {
        self.actor_user_id = Some(user_id.into());
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use quillboard_events::bus::{ChangeAction, ChangeEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ChangeEvent::new("Chapter", ChangeAction::Updated));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped
    /// and slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers. Never blocks or fails.
    pub fn publish(&self, event: ChangeEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
