//! Handlers for the library screen: the paged catalog listing.

use std::collections::HashSet;

use axum::extract::{OriginalUri, Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use comics_catalog::ListQuery;
use comics_core::character::Character;
use comics_core::routes::Destination;
use comics_core::types::CharacterId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /library`.
#[derive(Debug, Default, Deserialize)]
pub struct LibraryParams {
    /// Name prefix to search for. Blank means no search.
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// One row of the library list.
#[derive(Debug, Serialize)]
pub struct LibraryItem {
    pub id: CharacterId,
    pub name: String,
    pub thumbnail: String,
    /// Whether the character is already kept in the collection.
    pub in_collection: bool,
    /// Route of the character's detail screen.
    pub route: String,
}

/// View model of the library screen.
#[derive(Debug, Serialize)]
pub struct LibraryView {
    pub search: Option<String>,
    pub offset: u32,
    pub total: u32,
    pub next_offset: Option<u32>,
    pub characters: Vec<LibraryItem>,
}

impl LibraryItem {
    fn new(character: &Character, in_collection: bool) -> Self {
        Self {
            id: character.id,
            name: character.display_name().to_string(),
            thumbnail: character.thumbnail_or_empty().to_string(),
            in_collection,
            route: Destination::CharacterDetail(Some(character.id)).route(),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Send the client to the start screen.
pub async fn start() -> Redirect {
    Redirect::to(&Destination::START.route())
}

// ---------------------------------------------------------------------------
// GET /library
// ---------------------------------------------------------------------------

/// List catalog characters, one page at a time, in catalog order.
pub async fn list_library(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<LibraryParams>,
) -> AppResult<impl IntoResponse> {
    let search = params
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let query = ListQuery {
        name_starts_with: search.clone(),
        limit: params.limit,
        offset: params.offset.unwrap_or(0),
    };

    let page = state
        .catalog
        .list_characters(&query)
        .await
        .map_err(|e| AppError::catalog(e, uri.to_string()))?;

    let kept: HashSet<CharacterId> = state.manager.entries().iter().map(|e| e.id).collect();
    let characters: Vec<LibraryItem> = page
        .characters
        .iter()
        .map(|c| LibraryItem::new(c, kept.contains(&c.id)))
        .collect();

    tracing::debug!(
        search = search.as_deref().unwrap_or(""),
        offset = page.offset,
        count = characters.len(),
        "Listed library page"
    );

    Ok(Json(DataResponse {
        data: LibraryView {
            search,
            offset: page.offset,
            total: page.total,
            next_offset: page.next_offset(),
            characters,
        },
    }))
}
