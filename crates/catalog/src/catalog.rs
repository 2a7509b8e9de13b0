//! The catalog seam used by the screen layer.

use async_trait::async_trait;
use comics_core::character::Character;
use comics_core::types::CharacterId;
use serde::Serialize;

use crate::error::CatalogError;

/// Largest page the catalog will serve.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Parameters for a character listing.
///
/// The default query lists the first page of all characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Only characters whose name starts with this prefix.
    pub name_starts_with: Option<String>,
    /// Page size; the client's configured default when `None`.
    pub limit: Option<u32>,
    pub offset: u32,
}

impl ListQuery {
    pub fn search(prefix: impl Into<String>) -> Self {
        Self {
            name_starts_with: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Reject parameters the catalog would refuse.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_PAGE_LIMIT {
                return Err(CatalogError::InvalidQuery(format!(
                    "limit must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
                )));
            }
        }
        if matches!(self.name_starts_with.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(CatalogError::InvalidQuery(
                "name prefix cannot be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// One page of a character listing, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterPage {
    pub offset: u32,
    pub total: u32,
    pub characters: Vec<Character>,
}

impl CharacterPage {
    /// Offset of the following page, if any remain.
    ///
    /// `None` also when the next offset would not fit in a `u32`.
    pub fn next_offset(&self) -> Option<u32> {
        if self.characters.is_empty() {
            return None;
        }
        let count = u32::try_from(self.characters.len()).ok()?;
        let next = self.offset.checked_add(count)?;
        (next < self.total).then_some(next)
    }
}

/// Read-only access to the character catalog.
#[async_trait]
pub trait CharacterCatalog: Send + Sync {
    async fn list_characters(&self, query: &ListQuery) -> Result<CharacterPage, CatalogError>;

    /// Fetch one character, or [`CatalogError::NotFound`].
    async fn get_character(&self, id: CharacterId) -> Result<Character, CatalogError>;
}
