//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`CollectionEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use comics_core::types::{CharacterId, DbId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// CollectionEvent
// ---------------------------------------------------------------------------

/// What happened to the collection store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollectionEventKind {
    /// An entry was inserted or overwritten.
    EntrySaved,
    /// An entry was removed; `notes_removed` counts cascaded notes.
    EntryDeleted { notes_removed: u64 },
    NoteAdded { note_id: DbId },
    NoteDeleted { note_id: DbId },
}

/// A change to the collection store, scoped to one character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEvent {
    #[serde(flatten)]
    pub kind: CollectionEventKind,

    /// Character the change belongs to.
    pub character_id: CharacterId,

    /// When the change was applied (UTC).
    pub timestamp: DateTime<Utc>,
}

impl CollectionEvent {
    pub fn new(kind: CollectionEventKind, character_id: CharacterId) -> Self {
        Self {
            kind,
            character_id,
            timestamp: Utc::now(),
        }
    }

    /// Dot-separated event name, e.g. `"note.added"`.
    pub fn event_type(&self) -> &'static str {
        match self.kind {
            CollectionEventKind::EntrySaved => "collection.saved",
            CollectionEventKind::EntryDeleted { .. } => "collection.deleted",
            CollectionEventKind::NoteAdded { .. } => "note.added",
            CollectionEventKind::NoteDeleted { .. } => "note.deleted",
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`CollectionEvent`].
///
/// # Usage
///
/// ```rust
/// use comics_events::bus::{CollectionEvent, CollectionEventKind, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(CollectionEvent::new(CollectionEventKind::EntrySaved, 1009610));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<CollectionEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: CollectionEvent) {
        tracing::trace!(
            event_type = event.event_type(),
            character_id = event.character_id,
            "Publishing event"
        );
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<CollectionEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
