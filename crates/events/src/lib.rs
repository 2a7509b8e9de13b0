//! Change propagation for the collection store.
//!
//! - [`Observable`]: a snapshot cell backed by `tokio::sync::watch`. Every
//!   subscriber sees the full current value on subscribe and again after
//!   each change.
//! - [`EventBus`]: in-process publish/subscribe hub of [`CollectionEvent`]s
//!   backed by `tokio::sync::broadcast`, for consumers that want to know
//!   *what* changed rather than the resulting state.

pub mod bus;
pub mod observable;

pub use bus::{CollectionEvent, CollectionEventKind, EventBus};
pub use observable::Observable;
