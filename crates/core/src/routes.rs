//! Navigation destinations.
//!
//! Every screen is addressed by a [`Destination`]. The detail screen carries
//! an optional character id: a link with a missing or unparseable id still
//! produces a destination, and [`Destination::resolve`] turns it into a
//! redirect to the library instead of an error.

use std::fmt;

use crate::types::CharacterId;

pub const LIBRARY_ROUTE: &str = "/library";
pub const COLLECTION_ROUTE: &str = "/collection";
pub const CHARACTER_ROUTE: &str = "/character";

/// A screen the user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Library,
    Collection,
    CharacterDetail(Option<CharacterId>),
}

impl Destination {
    /// Start screen of the application.
    pub const START: Destination = Destination::Library;

    /// Build a detail destination from a raw path segment.
    ///
    /// Anything that is not a plain integer yields `CharacterDetail(None)`.
    pub fn character_detail(raw_id: Option<&str>) -> Self {
        let id = raw_id.and_then(|raw| raw.trim().parse::<CharacterId>().ok());
        Destination::CharacterDetail(id)
    }

    /// Parse a request path into a destination.
    ///
    /// Returns `None` for paths that do not belong to any screen.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" | LIBRARY_ROUTE => Some(Destination::Library),
            COLLECTION_ROUTE => Some(Destination::Collection),
            CHARACTER_ROUTE => Some(Destination::CharacterDetail(None)),
            _ => path
                .strip_prefix(CHARACTER_ROUTE)
                .and_then(|rest| rest.strip_prefix('/'))
                .filter(|rest| !rest.contains('/'))
                .map(|raw| Destination::character_detail(Some(raw))),
        }
    }

    /// Replace destinations that cannot be shown with the library.
    pub fn resolve(self) -> Self {
        match self {
            Destination::CharacterDetail(None) => Destination::Library,
            other => other,
        }
    }

    /// Path of this destination.
    pub fn route(&self) -> String {
        match self {
            Destination::Library => LIBRARY_ROUTE.to_string(),
            Destination::Collection => COLLECTION_ROUTE.to_string(),
            Destination::CharacterDetail(Some(id)) => format!("{CHARACTER_ROUTE}/{id}"),
            Destination::CharacterDetail(None) => CHARACTER_ROUTE.to_string(),
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}
