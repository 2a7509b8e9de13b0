//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod collection_repo;
pub mod note_repo;

pub use collection_repo::CollectionRepo;
pub use note_repo::NoteRepo;
