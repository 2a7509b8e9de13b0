//! Row structs and insert DTOs for the collection store.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row and, where rows get a generated key, a `Deserialize` create DTO.

pub mod collection_entry;
pub mod note;
