use comics_core::types::CharacterId;

/// Errors from the catalog client.
///
/// Everything except [`NotFound`](CatalogError::NotFound) and
/// [`InvalidQuery`](CatalogError::InvalidQuery) is a fetch failure: the
/// request could not be completed or its response could not be used.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response was well-formed HTTP but not the expected JSON.
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// No character with this id exists in the catalog.
    #[error("Character {0} not found in catalog")]
    NotFound(CharacterId),

    /// The caller supplied query parameters the catalog would reject.
    #[error("Invalid catalog query: {0}")]
    InvalidQuery(String),
}

impl CatalogError {
    /// Whether this error means the fetch itself failed and a retry could help.
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(
            self,
            CatalogError::NotFound(_) | CatalogError::InvalidQuery(_)
        )
    }
}
