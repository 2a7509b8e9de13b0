use comics_core::types::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// A note was added for a character that is not kept.
    #[error("Character {0} is not in the collection")]
    NotInCollection(CharacterId),

    /// The local store rejected or failed an operation.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
