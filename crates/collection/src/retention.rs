//! What happens to a character's notes when the character is deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Note handling on character delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteRetention {
    /// Remove the character's notes in the same transaction.
    #[default]
    Cascade,
    /// Leave the notes in place, orphaned.
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid note retention policy '{0}' (expected 'cascade' or 'keep')")]
pub struct ParseRetentionError(pub String);

impl NoteRetention {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteRetention::Cascade => "cascade",
            NoteRetention::Keep => "keep",
        }
    }
}

impl FromStr for NoteRetention {
    type Err = ParseRetentionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascade" => Ok(NoteRetention::Cascade),
            "keep" => Ok(NoteRetention::Keep),
            _ => Err(ParseRetentionError(s.to_string())),
        }
    }
}

impl fmt::Display for NoteRetention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
