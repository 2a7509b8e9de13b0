use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use comics_catalog::{CatalogApi, CharacterCatalog};
use comics_collection::CollectionManager;
use comics_events::EventBus;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comics_api::config::ServerConfig;
use comics_api::router::build_app_router;
use comics_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "comics_api=debug,comics_collection=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        notes_on_delete = %config.notes_on_delete,
        catalog = %config.catalog.base_url,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = comics_db::create_pool(&config.database_url)
        .await
        .context("Failed to open collection database")?;
    tracing::info!("Database connection pool created");

    comics_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    comics_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());
    let event_log_handle = tokio::spawn(log_collection_events(event_bus.subscribe()));

    // --- Collection manager ---
    let manager = Arc::new(
        CollectionManager::load(pool.clone(), config.notes_on_delete, Arc::clone(&event_bus))
            .await
            .context("Failed to load collection")?,
    );

    // --- Catalog client ---
    let catalog: Arc<dyn CharacterCatalog> =
        Arc::new(CatalogApi::new(config.catalog.clone()).context("Invalid catalog config")?);

    // --- App state ---
    let shutdown = CancellationToken::new();
    let state = AppState {
        pool,
        manager: Arc::clone(&manager),
        catalog,
        shutdown: shutdown.clone(),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    // Cancelling the token ends open event streams so serve can drain.
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            shutdown.cancel();
        })
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Dropping the last bus handles closes the channel and ends the logger.
    drop(manager);
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), event_log_handle).await;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global subscriber: `RUST_LOG` filter, and JSON output when
/// `LOG_FORMAT=json`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Log every collection change until the bus closes.
async fn log_collection_events(mut rx: broadcast::Receiver<comics_events::CollectionEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => tracing::debug!(
                event_type = event.event_type(),
                character_id = event.character_id,
                "Collection changed"
            ),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event logger lagged behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
