//! Handlers for notes attached to collection entries.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use comics_core::error::CoreError;
use comics_db::models::note::CreateNote;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for a new note. Missing fields are stored empty.
#[derive(Debug, Default, Deserialize)]
pub struct NoteBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// GET /collection/{id}/notes
pub async fn list_notes(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
) -> AppResult<impl IntoResponse> {
    let notes = state.manager.notes_for(character_id);
    tracing::debug!(character_id, count = notes.len(), "Listed notes");
    Ok(Json(DataResponse { data: notes }))
}

/// POST /collection/{id}/notes
///
/// The character must be in the collection; otherwise 404.
pub async fn create_note(
    State(state): State<AppState>,
    IdPath(character_id): IdPath,
    Json(body): Json<NoteBody>,
) -> AppResult<impl IntoResponse> {
    let input = CreateNote::new(character_id, body.title, body.text);
    let note = state.manager.add_note(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if state.manager.delete_note_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Note", id }))
    }
}
