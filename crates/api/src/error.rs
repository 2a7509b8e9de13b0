use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use comics_catalog::CatalogError;
use comics_collection::CollectionError;
use comics_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors of each crate and implements [`IntoResponse`] to
/// produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `comics_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request itself is malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The remote catalog could not serve the request.
    ///
    /// `retry` is the route that re-requests the failed screen, included in
    /// the response body for fetch failures.
    #[error("Catalog error: {source}")]
    Catalog {
        #[source]
        source: CatalogError,
        retry: Option<String>,
    },

    /// The local collection store failed.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a catalog error, remembering the route that retries the request.
    ///
    /// Only fetch failures keep the route; retrying a missing character or a
    /// rejected query cannot succeed.
    pub fn catalog(source: CatalogError, retry: impl Into<String>) -> Self {
        let retry = source.is_fetch_failure().then(|| retry.into());
        AppError::Catalog { source, retry }
    }
}

impl From<CatalogError> for AppError {
    fn from(source: CatalogError) -> Self {
        AppError::Catalog {
            source,
            retry: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut retry_link = None;

        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            AppError::Catalog { source, retry } => match source {
                CatalogError::NotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Character with id {id} not found"),
                ),
                CatalogError::InvalidQuery(msg) => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
                }
                other => {
                    tracing::warn!(error = %other, "Catalog fetch failed");
                    retry_link = retry.clone();
                    (
                        StatusCode::BAD_GATEWAY,
                        "FETCH_FAILED",
                        "Could not load data from the character catalog".to_string(),
                    )
                }
            },

            AppError::Collection(CollectionError::NotInCollection(id)) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("CollectionEntry with id {id} not found"),
            ),

            AppError::Collection(CollectionError::Storage(err)) => {
                tracing::error!(error = %err, "Collection store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "The local collection store failed".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(retry) = retry_link {
            body["retry"] = json!(retry);
        }

        (status, axum::Json(body)).into_response()
    }
}
