#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use comics_api::config::ServerConfig;
use comics_api::router::build_app_router;
use comics_api::state::AppState;
use comics_catalog::{
    ApiCredentials, CatalogConfig, CatalogError, CharacterCatalog, CharacterPage, ListQuery,
};
use comics_collection::{CollectionManager, NoteRetention};
use comics_core::character::Character;
use comics_core::types::CharacterId;
use comics_events::EventBus;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Fake catalog
// ---------------------------------------------------------------------------

/// In-memory stand-in for the remote catalog.
///
/// Serves a fixed set of characters in insertion order. While `offline` is
/// set every call fails the way an unreachable catalog would.
pub struct FakeCatalog {
    characters: Vec<Character>,
    offline: AtomicBool,
}

impl FakeCatalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            characters,
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), CatalogError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CatalogError::ApiError {
                status: 503,
                body: "catalog offline".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CharacterCatalog for FakeCatalog {
    async fn list_characters(&self, query: &ListQuery) -> Result<CharacterPage, CatalogError> {
        query.validate()?;
        self.check_online()?;

        let matching: Vec<&Character> = self
            .characters
            .iter()
            .filter(|c| match &query.name_starts_with {
                Some(prefix) => c.name.as_deref().unwrap_or("").starts_with(prefix.as_str()),
                None => true,
            })
            .collect();

        Ok(CharacterPage {
            offset: query.offset,
            total: matching.len() as u32,
            characters: matching
                .into_iter()
                .skip(query.offset as usize)
                .take(query.limit.unwrap_or(20) as usize)
                .cloned()
                .collect(),
        })
    }

    async fn get_character(&self, id: CharacterId) -> Result<Character, CatalogError> {
        self.check_online()?;
        self.characters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

pub fn character(id: CharacterId, name: Option<&str>, comics: &[&str]) -> Character {
    Character {
        id,
        name: name.map(str::to_string),
        description: None,
        thumbnail: Some(format!("http://img.example/{id}.jpg")),
        comics: comics.iter().map(|c| c.to_string()).collect(),
    }
}

/// Characters served by the default fake catalog.
pub fn sample_characters() -> Vec<Character> {
    vec![
        character(1011334, Some("3-D Man"), &["Avengers: The Initiative #14"]),
        character(1009610, Some("Spider-Man"), &["Amazing Fantasy #15", "ASM #1"]),
        character(1009608, Some("Spider-Woman"), &[]),
        character(1009629, None, &[]),
    ]
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(retention: NoteRetention) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        notes_on_delete: retention,
        catalog: CatalogConfig::new(ApiCredentials::new("test-public", "test-private")),
    }
}

pub struct TestApp {
    pub router: Router,
    pub catalog: Arc<FakeCatalog>,
    pub manager: Arc<CollectionManager>,
    /// Shutdown signal shared with the router state.
    pub shutdown: CancellationToken,
}

impl TestApp {
    /// A fresh router sharing this app's state.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router over the sample catalog, using the
/// default cascade policy.
pub async fn build_test_app(pool: SqlitePool) -> TestApp {
    build_test_app_with(pool, NoteRetention::Cascade).await
}

/// Build the full application router with all middleware layers, mirroring
/// the construction in `main.rs`.
pub async fn build_test_app_with(pool: SqlitePool, retention: NoteRetention) -> TestApp {
    let config = test_config(retention);
    let catalog = Arc::new(FakeCatalog::new(sample_characters()));
    let manager = Arc::new(
        CollectionManager::load(pool.clone(), retention, Arc::new(EventBus::default()))
            .await
            .unwrap(),
    );

    let shutdown = CancellationToken::new();

    let state = AppState {
        pool,
        manager: Arc::clone(&manager),
        catalog: Arc::clone(&catalog) as Arc<dyn CharacterCatalog>,
        shutdown: shutdown.clone(),
    };

    TestApp {
        router: build_app_router(state, &config),
        catalog,
        manager,
        shutdown,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect should carry a location")
        .to_str()
        .unwrap()
}
