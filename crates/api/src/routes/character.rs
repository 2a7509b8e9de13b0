use axum::routing::{get, post};
use axum::Router;
use comics_core::routes::CHARACTER_ROUTE;

use crate::handlers::character;
use crate::state::AppState;

/// Detail screen routes.
///
/// ```text
/// GET    /character                -> get_character (redirect)
/// GET    /character/{id}           -> get_character
/// POST   /character/{id}/collect   -> collect_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(CHARACTER_ROUTE, get(character::get_character))
        .route(
            &format!("{CHARACTER_ROUTE}/{{id}}"),
            get(character::get_character),
        )
        .route(
            &format!("{CHARACTER_ROUTE}/{{id}}/collect"),
            post(character::collect_character),
        )
}
