//! Request extractors shared by the handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// A numeric `{id}` path segment.
///
/// A malformed id is rejected with the usual `{ "error", "code" }` JSON body
/// rather than axum's plain-text rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        raw.trim()
            .parse()
            .map(IdPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid id '{raw}'")))
    }
}
