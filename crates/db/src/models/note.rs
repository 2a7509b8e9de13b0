//! Note model and DTOs (the `notes` table).

use comics_core::types::{CharacterId, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub id: DbId,
    pub character_id: CharacterId,
    pub title: String,
    pub text: String,
}

/// DTO for creating a new note. Empty titles and bodies are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateNote {
    pub character_id: CharacterId,
    pub title: String,
    pub text: String,
}

impl CreateNote {
    pub fn new(character_id: CharacterId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            character_id,
            title: title.into(),
            text: text.into(),
        }
    }
}
