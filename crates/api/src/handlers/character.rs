//! Handlers for the character detail screen.
//!
//! The detail route never fails on a bad identifier: a missing or
//! unparseable id, or one the catalog does not know, redirects to the
//! library instead.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use comics_catalog::CatalogError;
use comics_core::character::Character;
use comics_core::routes::Destination;
use comics_core::types::CharacterId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// View model of the detail screen.
#[derive(Debug, Serialize)]
pub struct CharacterDetailView {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub comics: String,
    /// Whether the character is already kept; toggles the add button.
    pub in_collection: bool,
}

impl CharacterDetailView {
    fn new(character: &Character, in_collection: bool) -> Self {
        Self {
            id: character.id,
            name: character.display_name().to_string(),
            description: character.display_description().to_string(),
            thumbnail: character.thumbnail_or_empty().to_string(),
            comics: character.comics_display(),
            in_collection,
        }
    }
}

fn redirect(destination: Destination) -> Response {
    Redirect::to(&destination.route()).into_response()
}

/// Render the detail screen for a destination, or redirect if it cannot be shown.
async fn show(state: &AppState, destination: Destination) -> AppResult<Response> {
    let resolved = destination.resolve();
    let Destination::CharacterDetail(Some(id)) = resolved else {
        tracing::debug!(requested = %destination, to = %resolved, "Detail without usable id, redirecting");
        return Ok(redirect(resolved));
    };

    match state.catalog.get_character(id).await {
        Ok(character) => {
            let view = CharacterDetailView::new(&character, state.manager.contains(id));
            Ok(Json(DataResponse { data: view }).into_response())
        }
        Err(CatalogError::NotFound(_)) => {
            tracing::debug!(id, "Character not in catalog, redirecting");
            Ok(redirect(Destination::Library))
        }
        Err(e) => Err(AppError::catalog(e, destination.route())),
    }
}

// ---------------------------------------------------------------------------
// GET /character, GET /character/{id}
// ---------------------------------------------------------------------------

/// Detail screen for whatever character the path names, if any.
pub async fn get_character(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Response> {
    let destination = Destination::parse(uri.path()).unwrap_or_default();
    show(&state, destination).await
}

// ---------------------------------------------------------------------------
// POST /character/{id}/collect
// ---------------------------------------------------------------------------

/// Keep the character in the collection, overwriting any earlier copy.
pub async fn collect_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let retry = Destination::CharacterDetail(Some(id)).route();
    let character = state
        .catalog
        .get_character(id)
        .await
        .map_err(|e| AppError::catalog(e, retry))?;

    let entry = state.manager.add_character(&character).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
