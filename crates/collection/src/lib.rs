//! The Collection Manager.
//!
//! [`CollectionManager`] sits between the screens and the local store. It
//! owns the observable snapshots of the `collection` and `notes` tables,
//! serialises every mutation, and republishes the affected snapshot before
//! the mutating call returns.

pub mod error;
pub mod manager;
pub mod retention;

pub use error::CollectionError;
pub use manager::CollectionManager;
pub use retention::{NoteRetention, ParseRetentionError};
