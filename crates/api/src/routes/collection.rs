use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{collection, notes};
use crate::state::AppState;

/// Collection screen, its live updates, and notes.
///
/// ```text
/// GET    /collection               -> get_collection (?expanded={id})
/// GET    /collection/events        -> collection_events (SSE)
/// DELETE /collection/{id}          -> delete_character
/// GET    /collection/{id}/notes    -> list_notes
/// POST   /collection/{id}/notes    -> create_note
/// DELETE /notes/{id}               -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collection", get(collection::get_collection))
        .route("/collection/events", get(collection::collection_events))
        .route("/collection/{id}", delete(collection::delete_character))
        .route(
            "/collection/{id}/notes",
            get(notes::list_notes).post(notes::create_note),
        )
        .route("/notes/{id}", delete(notes::delete_note))
}
