//! Collection entry model (the `collection` table).

use comics_core::character::{Character, NO_NAME};
use comics_core::types::CharacterId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `collection` table: the locally kept projection of a
/// catalog character. The id is the catalog id, so it doubles as the key.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: CharacterId,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    /// Comic titles already flattened for display.
    pub comics: String,
}

impl CollectionEntry {
    /// Project a catalog character into a collection entry.
    pub fn from_character(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            thumbnail: character.thumbnail.clone(),
            comics: character.comics_display(),
        }
    }

    /// Name for display, falling back to the "No name" placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(NO_NAME)
    }
}

impl From<&Character> for CollectionEntry {
    fn from(character: &Character) -> Self {
        Self::from_character(character)
    }
}

#[cfg(test)]
mod tests {
    use comics_core::character::NO_COMICS;

    use super::*;

    #[test]
    fn projection_flattens_comics() {
        let character = Character {
            id: 1009610,
            name: Some("Spider-Man".to_string()),
            description: Some("Bitten by a radioactive spider".to_string()),
            thumbnail: Some("http://i.annihil.us/spidey.jpg".to_string()),
            comics: vec!["Amazing Fantasy #15".to_string(), "ASM #1".to_string()],
        };

        let entry = CollectionEntry::from_character(&character);
        assert_eq!(entry.id, 1009610);
        assert_eq!(entry.name.as_deref(), Some("Spider-Man"));
        assert_eq!(entry.thumbnail.as_deref(), Some("http://i.annihil.us/spidey.jpg"));
        assert_eq!(entry.comics, "Amazing Fantasy #15, ASM #1");
    }

    #[test]
    fn projection_of_bare_character_uses_placeholders() {
        let character = Character {
            id: 3,
            name: None,
            description: None,
            thumbnail: None,
            comics: vec![],
        };

        let entry = CollectionEntry::from(&character);
        assert_eq!(entry.comics, NO_COMICS);
        assert_eq!(entry.display_name(), NO_NAME);
    }
}
