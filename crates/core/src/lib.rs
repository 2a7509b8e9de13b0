//! Domain building blocks shared by every crate in the comics library:
//! identifiers, the catalog `Character` view, comic-title formatting,
//! request signing and navigation destinations.

pub mod character;
pub mod error;
pub mod hashing;
pub mod routes;
pub mod types;
