//! Repository for the `collection` table.

use comics_core::types::CharacterId;
use sqlx::SqlitePool;

use crate::models::collection_entry::CollectionEntry;

const COLUMNS: &str = "id, name, thumbnail, comics";

/// Provides CRUD operations for collection entries.
pub struct CollectionRepo;

impl CollectionRepo {
    /// Insert an entry, overwriting any existing entry with the same id.
    pub async fn upsert(
        pool: &SqlitePool,
        entry: &CollectionEntry,
    ) -> Result<CollectionEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO collection (id, name, thumbnail, comics) \
             VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT (id) DO UPDATE SET \
                name = excluded.name, \
                thumbnail = excluded.thumbnail, \
                comics = excluded.comics \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CollectionEntry>(&query)
            .bind(entry.id)
            .bind(&entry.name)
            .bind(&entry.thumbnail)
            .bind(&entry.comics)
            .fetch_one(pool)
            .await
    }

    /// Whether an entry with this character id exists.
    pub async fn exists(pool: &SqlitePool, id: CharacterId) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM collection WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// List all entries ordered by character id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<CollectionEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collection ORDER BY id ASC");
        sqlx::query_as::<_, CollectionEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete an entry by id, leaving its notes in place.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: CharacterId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collection WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an entry and every note owned by it in one transaction.
    ///
    /// Returns whether the entry existed and how many notes were removed.
    /// Orphaned notes are removed even when the entry itself is already gone.
    pub async fn delete_with_notes(
        pool: &SqlitePool,
        id: CharacterId,
    ) -> Result<(bool, u64), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let notes = sqlx::query("DELETE FROM notes WHERE character_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let entry = sqlx::query("DELETE FROM collection WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(id, notes_removed = notes, "Deleted collection entry with notes");
        Ok((entry > 0, notes))
    }
}
