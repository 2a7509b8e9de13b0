//! REST client for the catalog HTTP endpoints.
//!
//! Wraps `GET characters` and `GET characters/{id}` using [`reqwest`],
//! attaching fresh authentication parameters to every request.

use async_trait::async_trait;
use comics_core::character::Character;
use comics_core::types::CharacterId;
use reqwest::{StatusCode, Url};

use crate::auth::ApiCredentials;
use crate::catalog::{CharacterCatalog, CharacterPage, ListQuery};
use crate::error::CatalogError;
use crate::models::{CharacterDto, DataWrapper};

/// Public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "http://gateway.marvel.com/v1/public/";

/// Page size used when a listing does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Connection settings for [`CatalogApi`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub credentials: ApiCredentials,
    pub page_limit: u32,
}

impl CatalogConfig {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// HTTP client for the character catalog.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: Url,
    credentials: ApiCredentials,
    page_limit: u32,
}

impl CatalogApi {
    /// Create a client from config.
    ///
    /// The base URL is normalised to end in `/` so endpoint paths join
    /// beneath it rather than replacing its last segment.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut base = config.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| CatalogError::InvalidUrl(format!("{base}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            credentials: config.credentials,
            page_limit: config.page_limit,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full, signed URL for an endpoint path and extra parameters.
    pub fn signed_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, CatalogError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidUrl(format!("{path}: {e}")))?;

        let auth = self.credentials.sign_now();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            for (key, value) in auth.as_query() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// List characters, one page at a time, in catalog order.
    pub async fn list_characters(&self, query: &ListQuery) -> Result<CharacterPage, CatalogError> {
        query.validate()?;

        let mut params = vec![
            ("limit", query.limit.unwrap_or(self.page_limit).to_string()),
            ("offset", query.offset.to_string()),
        ];
        if let Some(prefix) = &query.name_starts_with {
            params.push(("nameStartsWith", prefix.trim().to_string()));
        }

        let url = self.signed_url("characters", &params)?;
        let wrapper: DataWrapper<CharacterDto> = self.get_json(url).await?;

        let page = CharacterPage {
            offset: wrapper.data.offset,
            total: wrapper.data.total,
            characters: wrapper.data.results.into_iter().map(Character::from).collect(),
        };
        tracing::debug!(
            offset = page.offset,
            count = page.characters.len(),
            total = page.total,
            "Fetched character page"
        );
        Ok(page)
    }

    /// Fetch a single character by id.
    pub async fn get_character(&self, id: CharacterId) -> Result<Character, CatalogError> {
        let url = self.signed_url(&format!("characters/{id}"), &[])?;

        let wrapper: DataWrapper<CharacterDto> = match self.get_json(url).await {
            Err(CatalogError::ApiError { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(CatalogError::NotFound(id));
            }
            other => other?,
        };

        wrapper
            .data
            .results
            .into_iter()
            .next()
            .map(Character::from)
            .ok_or(CatalogError::NotFound(id))
    }

    // ---- private helpers ----

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Catalog request failed");
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CharacterCatalog for CatalogApi {
    async fn list_characters(&self, query: &ListQuery) -> Result<CharacterPage, CatalogError> {
        CatalogApi::list_characters(self, query).await
    }

    async fn get_character(&self, id: CharacterId) -> Result<Character, CatalogError> {
        CatalogApi::get_character(self, id).await
    }
}
