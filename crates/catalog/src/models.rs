//! Wire types for the catalog's JSON responses.
//!
//! Every response is wrapped in an envelope:
//!
//! ```text
//! { "code": 200, "status": "Ok",
//!   "data": { "offset": 0, "limit": 20, "total": 1562, "count": 20,
//!             "results": [ ... ] } }
//! ```
//!
//! Fields the application never reads are not modelled; unknown fields are
//! ignored by serde.

use comics_core::character::Character;
use comics_core::types::CharacterId;
use serde::Deserialize;

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct DataWrapper<T> {
    pub code: Option<i64>,
    pub status: Option<String>,
    pub data: DataContainer<T>,
}

/// Paged result set inside the envelope.
#[derive(Debug, Deserialize)]
pub struct DataContainer<T> {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A character record as sent by the catalog.
#[derive(Debug, Deserialize)]
pub struct CharacterDto {
    pub id: CharacterId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<ImageDto>,
    pub comics: Option<ComicListDto>,
}

/// Image reference split into path and file extension.
#[derive(Debug, Deserialize)]
pub struct ImageDto {
    pub path: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComicListDto {
    #[serde(default = "Vec::new")]
    pub items: Vec<ComicSummaryDto>,
}

#[derive(Debug, Deserialize)]
pub struct ComicSummaryDto {
    pub name: Option<String>,
}

impl ImageDto {
    /// Full image URL, `path.extension`. `None` unless both parts are present.
    pub fn url(&self) -> Option<String> {
        match (self.path.as_deref(), self.extension.as_deref()) {
            (Some(path), Some(ext)) if !path.is_empty() => Some(format!("{path}.{ext}")),
            _ => None,
        }
    }
}

impl From<CharacterDto> for Character {
    fn from(dto: CharacterDto) -> Self {
        let thumbnail = dto.thumbnail.as_ref().and_then(ImageDto::url);
        let comics = dto
            .comics
            .map(|list| list.items.into_iter().filter_map(|item| item.name).collect())
            .unwrap_or_default();

        Character {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            thumbnail,
            comics,
        }
    }
}
