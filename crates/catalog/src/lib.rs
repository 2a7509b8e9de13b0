//! Read-only client for the remote comic-character catalog.
//!
//! Every request is signed with a timestamp, the public key and an MD5
//! hash of both keys (see [`auth`]). Responses are parsed from the
//! catalog's JSON envelope ([`models`]) into [`comics_core::character::Character`].
//! The screen layer depends on the [`CharacterCatalog`] trait rather than
//! on [`CatalogApi`] directly.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod models;

pub use api::{CatalogApi, CatalogConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};
pub use auth::{ApiCredentials, AuthParams};
pub use catalog::{CharacterCatalog, CharacterPage, ListQuery};
pub use error::CatalogError;
