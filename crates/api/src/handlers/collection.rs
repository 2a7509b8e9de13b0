//! Handlers for the collection screen.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::Json;
use comics_core::error::CoreError;
use comics_core::routes::Destination;
use comics_core::types::CharacterId;
use comics_db::models::collection_entry::CollectionEntry;
use comics_db::models::note::Note;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /collection`.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionParams {
    /// Entry whose notes are shown expanded.
    pub expanded: Option<CharacterId>,
}

/// One kept character as shown on the collection screen.
#[derive(Debug, Serialize)]
pub struct CollectionItem {
    pub id: CharacterId,
    pub name: String,
    pub thumbnail: String,
    pub comics: String,
    pub route: String,
}

/// View model of the collection screen.
#[derive(Debug, Serialize)]
pub struct CollectionView {
    pub entries: Vec<CollectionItem>,
    /// The expanded entry, if it is in the collection.
    pub expanded: Option<CharacterId>,
    /// Notes of the expanded entry; empty when nothing is expanded.
    pub notes: Vec<Note>,
}

impl From<&CollectionEntry> for CollectionItem {
    fn from(entry: &CollectionEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.display_name().to_string(),
            thumbnail: entry.thumbnail.clone().unwrap_or_default(),
            comics: entry.comics.clone(),
            route: Destination::CharacterDetail(Some(entry.id)).route(),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /collection
// ---------------------------------------------------------------------------

pub async fn get_collection(
    State(state): State<AppState>,
    Query(params): Query<CollectionParams>,
) -> AppResult<impl IntoResponse> {
    let entries = state.manager.entries();
    let expanded = params
        .expanded
        .filter(|id| entries.iter().any(|entry| entry.id == *id));
    let notes = expanded
        .map(|id| state.manager.notes_for(id))
        .unwrap_or_default();

    tracing::debug!(count = entries.len(), ?expanded, "Rendered collection");

    Ok(Json(DataResponse {
        data: CollectionView {
            entries: entries.iter().map(CollectionItem::from).collect(),
            expanded,
            notes,
        },
    }))
}

// ---------------------------------------------------------------------------
// DELETE /collection/{id}
// ---------------------------------------------------------------------------

pub async fn delete_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if state.manager.delete_character_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CollectionEntry",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// GET /collection/events
// ---------------------------------------------------------------------------

/// Server-sent events carrying the full collection (`collection`) and note
/// (`notes`) snapshots: once on connect and again after every change.
///
/// The stream ends when the server begins shutting down.
pub async fn collection_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let entries = state
        .manager
        .entries_stream()
        .map(|entries| Event::default().event("collection").json_data(entries));
    let notes = state
        .manager
        .notes_stream()
        .map(|notes| Event::default().event("notes").json_data(notes));

    tracing::debug!("Collection event stream opened");
    let stream = futures::stream::select(entries, notes)
        .take_until(state.shutdown.clone().cancelled_owned());
    Sse::new(stream).keep_alive(KeepAlive::default())
}
