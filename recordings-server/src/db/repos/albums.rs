//! Album repository - Postgres
//!
//! One parameterized statement per operation:
//! - insert: INSERT ... RETURNING id (storage assigns the id)
//! - delete: row count returned, not assumed

use async_trait::async_trait;
use sqlx::PgPool;

use super::{AlbumStore, DbError};
use crate::models::{Album, AlbumId, NewAlbum};

/// Postgres-backed album repository.
#[derive(Clone)]
pub struct AlbumRepo {
    pool: PgPool,
}

impl AlbumRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for AlbumRepo {
    /// Ordered by id so repeated listings are stable.
    async fn list(&self) -> Result<Vec<Album>, DbError> {
        let albums = sqlx::query_as::<_, Album>(
            "SELECT id, title, artist, price FROM album ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(albums)
    }

    async fn get(&self, id: AlbumId) -> Result<Album, DbError> {
        sqlx::query_as::<_, Album>("SELECT id, title, artist, price FROM album WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::album_not_found(id))
    }

    async fn insert(&self, album: NewAlbum) -> Result<Album, DbError> {
        let id: AlbumId = sqlx::query_scalar(
            "INSERT INTO album (title, artist, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(album.with_id(id))
    }

    async fn delete(&self, id: AlbumId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM album WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
