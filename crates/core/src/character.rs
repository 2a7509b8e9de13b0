//! Catalog character view and the presentation defaults applied to it.
//!
//! A [`Character`] is the read-only projection of a remote catalog record.
//! Absent fields stay `None` here and are replaced with placeholder strings
//! only when rendered.

use serde::{Deserialize, Serialize};

use crate::types::CharacterId;

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

/// Rendered in place of a missing character name.
pub const NO_NAME: &str = "No name";

/// Rendered in place of a missing or empty description.
pub const NO_DESCRIPTION: &str = "No description";

/// Rendered in place of an empty comics list.
pub const NO_COMICS: &str = "No comics";

/// Separator between comic titles in the flattened display string.
pub const COMICS_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// A character as returned by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Full image URL (`path.extension`), when the catalog supplied one.
    pub thumbnail: Option<String>,
    /// Titles of the comics the character appears in, in catalog order.
    pub comics: Vec<String>,
}

impl Character {
    /// Name for display, falling back to [`NO_NAME`].
    pub fn display_name(&self) -> &str {
        non_blank(self.name.as_deref()).unwrap_or(NO_NAME)
    }

    /// Description for display, falling back to [`NO_DESCRIPTION`].
    pub fn display_description(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    /// Comic titles flattened into one display string.
    pub fn comics_display(&self) -> String {
        comics_to_string(&self.comics)
    }

    /// Thumbnail URL, or an empty string when the catalog had none.
    pub fn thumbnail_or_empty(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or_default()
    }
}

/// Join comic titles with `", "`; an empty list renders as [`NO_COMICS`].
pub fn comics_to_string<S: AsRef<str>>(titles: &[S]) -> String {
    if titles.is_empty() {
        return NO_COMICS.to_string();
    }
    titles
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(COMICS_SEPARATOR)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
