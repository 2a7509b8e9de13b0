use axum::routing::get;
use axum::Router;
use comics_core::routes::LIBRARY_ROUTE;

use crate::handlers::library;
use crate::state::AppState;

/// Library screen and the start redirect.
///
/// ```text
/// GET    /                         -> start (redirect to /library)
/// GET    /library                  -> list_library (?name=&offset=&limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(library::start))
        .route(LIBRARY_ROUTE, get(library::list_library))
}
