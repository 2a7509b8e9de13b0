//! Collection Manager: mutations plus observable snapshots of the store.

use std::sync::Arc;

use comics_core::character::Character;
use comics_core::types::{CharacterId, DbId};
use comics_db::models::collection_entry::CollectionEntry;
use comics_db::models::note::{CreateNote, Note};
use comics_db::repositories::{CollectionRepo, NoteRepo};
use comics_db::DbPool;
use comics_events::{CollectionEvent, CollectionEventKind, EventBus, Observable};
use tokio::sync::{watch, Mutex};
use tokio_stream::wrappers::WatchStream;

use crate::error::CollectionError;
use crate::retention::NoteRetention;

/// Mediates between the screens and the collection store.
///
/// Mutations are serialised through an async mutex. Each one re-reads the
/// table it touched and publishes the full snapshot before returning, so a
/// read issued after the call always observes the change.
///
/// If that re-read fails after the write has committed, the event for the
/// write is still published and the storage error is returned. The snapshot
/// then lags the store until the next successful mutation refreshes it.
pub struct CollectionManager {
    pool: DbPool,
    retention: NoteRetention,
    entries: Observable<Vec<CollectionEntry>>,
    notes: Observable<Vec<Note>>,
    events: Arc<EventBus>,
    write_lock: Mutex<()>,
}

impl CollectionManager {
    /// Build a manager and take the initial snapshots of both tables.
    pub async fn load(
        pool: DbPool,
        retention: NoteRetention,
        events: Arc<EventBus>,
    ) -> Result<Self, CollectionError> {
        let entries = CollectionRepo::list(&pool).await?;
        let notes = NoteRepo::list(&pool).await?;
        tracing::info!(
            entries = entries.len(),
            notes = notes.len(),
            retention = %retention,
            "Collection loaded"
        );

        Ok(Self {
            pool,
            retention,
            entries: Observable::new(entries),
            notes: Observable::new(notes),
            events,
            write_lock: Mutex::new(()),
        })
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    // ---- snapshots ----

    /// Current collection, ordered by character id.
    pub fn entries(&self) -> Vec<CollectionEntry> {
        self.entries.get()
    }

    /// Every stored note, in insertion order.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.get()
    }

    /// Notes owned by one character: the subset of [`notes`](Self::notes)
    /// whose owner matches.
    pub fn notes_for(&self, character_id: CharacterId) -> Vec<Note> {
        self.notes
            .get()
            .into_iter()
            .filter(|note| note.character_id == character_id)
            .collect()
    }

    /// Whether the character is currently kept.
    pub fn contains(&self, id: CharacterId) -> bool {
        self.entries.get().iter().any(|entry| entry.id == id)
    }

    pub fn watch_entries(&self) -> watch::Receiver<Vec<CollectionEntry>> {
        self.entries.subscribe()
    }

    pub fn watch_notes(&self) -> watch::Receiver<Vec<Note>> {
        self.notes.subscribe()
    }

    /// Stream of collection snapshots, starting with the current one.
    pub fn entries_stream(&self) -> WatchStream<Vec<CollectionEntry>> {
        self.entries.stream()
    }

    /// Stream of note snapshots, starting with the current one.
    pub fn notes_stream(&self) -> WatchStream<Vec<Note>> {
        self.notes.stream()
    }

    // ---- mutations ----

    /// Keep a character. An existing entry with the same id is overwritten.
    pub async fn add_character(
        &self,
        character: &Character,
    ) -> Result<CollectionEntry, CollectionError> {
        let _guard = self.write_lock.lock().await;

        let entry =
            CollectionRepo::upsert(&self.pool, &CollectionEntry::from_character(character)).await?;
        let refreshed = self.refresh_entries().await;

        tracing::info!(id = entry.id, name = %entry.display_name(), "Character added to collection");
        self.events
            .publish(CollectionEvent::new(CollectionEventKind::EntrySaved, entry.id));
        refreshed?;
        Ok(entry)
    }

    pub async fn delete_character(&self, entry: &CollectionEntry) -> Result<bool, CollectionError> {
        self.delete_character_by_id(entry.id).await
    }

    /// Remove a character from the collection, handling its notes per the
    /// configured [`NoteRetention`]. Returns `false` if no entry existed.
    pub async fn delete_character_by_id(&self, id: CharacterId) -> Result<bool, CollectionError> {
        let _guard = self.write_lock.lock().await;

        let (deleted, notes_removed) = match self.retention {
            NoteRetention::Cascade => CollectionRepo::delete_with_notes(&self.pool, id).await?,
            NoteRetention::Keep => (CollectionRepo::delete(&self.pool, id).await?, 0),
        };

        let mut refreshed = self.refresh_entries().await;
        if notes_removed > 0 {
            refreshed = refreshed.and(self.refresh_notes().await);
        }

        if deleted {
            tracing::info!(id, notes_removed, "Character removed from collection");
            self.events.publish(CollectionEvent::new(
                CollectionEventKind::EntryDeleted { notes_removed },
                id,
            ));
        } else {
            tracing::debug!(id, notes_removed, "Delete requested for character not in collection");
        }
        refreshed?;
        Ok(deleted)
    }

    /// Store a note for a kept character. Title and body are not validated.
    ///
    /// Fails with [`CollectionError::NotInCollection`] when the owner is not
    /// in the collection, so every stored note starts out attached to an entry.
    pub async fn add_note(&self, input: &CreateNote) -> Result<Note, CollectionError> {
        let _guard = self.write_lock.lock().await;

        if !CollectionRepo::exists(&self.pool, input.character_id).await? {
            tracing::debug!(character_id = input.character_id, "Note rejected, character not kept");
            return Err(CollectionError::NotInCollection(input.character_id));
        }

        let note = NoteRepo::create(&self.pool, input).await?;
        let refreshed = self.refresh_notes().await;

        tracing::info!(id = note.id, character_id = note.character_id, "Note added");
        self.events.publish(CollectionEvent::new(
            CollectionEventKind::NoteAdded { note_id: note.id },
            note.character_id,
        ));
        refreshed?;
        Ok(note)
    }

    pub async fn delete_note(&self, note: &Note) -> Result<bool, CollectionError> {
        self.delete_note_by_id(note.id).await
    }

    /// Remove a note by id. Returns `false` if no such note existed.
    pub async fn delete_note_by_id(&self, id: DbId) -> Result<bool, CollectionError> {
        let _guard = self.write_lock.lock().await;

        let Some(note) = NoteRepo::find_by_id(&self.pool, id).await? else {
            tracing::debug!(id, "Delete requested for unknown note");
            return Ok(false);
        };

        let deleted = NoteRepo::delete(&self.pool, id).await?;
        let refreshed = self.refresh_notes().await;

        if deleted {
            tracing::info!(id, character_id = note.character_id, "Note deleted");
            self.events.publish(CollectionEvent::new(
                CollectionEventKind::NoteDeleted { note_id: id },
                note.character_id,
            ));
        }
        refreshed?;
        Ok(deleted)
    }

    // ---- private helpers ----

    async fn refresh_entries(&self) -> Result<(), CollectionError> {
        match CollectionRepo::list(&self.pool).await {
            Ok(entries) => {
                self.entries.set(entries);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to refresh collection snapshot");
                Err(e.into())
            }
        }
    }

    async fn refresh_notes(&self) -> Result<(), CollectionError> {
        match NoteRepo::list(&self.pool).await {
            Ok(notes) => {
                self.notes.set(notes);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to refresh note snapshot");
                Err(e.into())
            }
        }
    }
}
