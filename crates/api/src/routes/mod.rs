pub mod character;
pub mod collection;
pub mod health;
pub mod library;

use axum::Router;

use crate::state::AppState;

/// Build the screen route tree.
///
/// ```text
/// /                                  redirect to the start screen
/// /library                           library (catalog listing)
/// /character/{id}                    detail
/// /character/{id}/collect            add to collection (POST)
/// /collection                        collection (?expanded={id})
/// /collection/events                 snapshot stream (SSE)
/// /collection/{id}                   delete character (DELETE)
/// /collection/{id}/notes             list, create notes
/// /notes/{id}                        delete note (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(library::router())
        .merge(character::router())
        .merge(collection::router())
}
