//! Comics library HTTP server.
//!
//! Exposes the screens (library, character detail, collection) as JSON
//! view-model endpoints. Config, state, error handling and the router
//! builder live here so integration tests and the binary share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
