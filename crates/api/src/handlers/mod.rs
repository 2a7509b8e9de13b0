pub mod character;
pub mod collection;
pub mod library;
pub mod notes;
