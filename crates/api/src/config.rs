use std::fmt::Display;
use std::str::FromStr;

use comics_catalog::catalog::MAX_PAGE_LIMIT;
use comics_catalog::{ApiCredentials, CatalogConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};
use comics_collection::NoteRetention;

/// Default SQLite database, created next to the binary on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://comics-library.db?mode=rwc";

/// A required variable is missing or a value does not parse.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the catalog keys has a default suitable for local use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database_url: String,
    /// What happens to notes when their character is deleted.
    pub notes_on_delete: NoteRetention,
    /// Remote catalog endpoint, keys and default page size.
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `127.0.0.1`                             |
    /// | `PORT`                 | `3000`                                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    /// | `DATABASE_URL`         | `sqlite://comics-library.db?mode=rwc`   |
    /// | `NOTES_ON_DELETE`      | `cascade`                               |
    /// | `CATALOG_BASE_URL`     | `http://gateway.marvel.com/v1/public/`  |
    /// | `CATALOG_PAGE_LIMIT`   | `20`                                    |
    /// | `MARVEL_PUBLIC_KEY`    | required                                |
    /// | `MARVEL_PRIVATE_KEY`   | required                                |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "127.0.0.1");
        let port: u16 = parse("PORT", &var("PORT", "3000"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 =
            parse("REQUEST_TIMEOUT_SECS", &var("REQUEST_TIMEOUT_SECS", "30"))?;

        let database_url = var("DATABASE_URL", DEFAULT_DATABASE_URL);

        let notes_on_delete: NoteRetention =
            parse("NOTES_ON_DELETE", &var("NOTES_ON_DELETE", "cascade"))?;

        let page_limit: u32 = parse(
            "CATALOG_PAGE_LIMIT",
            &var("CATALOG_PAGE_LIMIT", &DEFAULT_PAGE_LIMIT.to_string()),
        )?;
        if page_limit == 0 || page_limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::Invalid {
                var: "CATALOG_PAGE_LIMIT",
                reason: format!("must be between 1 and {MAX_PAGE_LIMIT}"),
            });
        }

        let public_key = required(&lookup, "MARVEL_PUBLIC_KEY")?;
        let private_key = required(&lookup, "MARVEL_PRIVATE_KEY")?;

        let catalog = CatalogConfig {
            base_url: var("CATALOG_BASE_URL", DEFAULT_BASE_URL),
            credentials: ApiCredentials::new(public_key, private_key),
            page_limit,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            notes_on_delete,
            catalog,
        })
    }
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}
