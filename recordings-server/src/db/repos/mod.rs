//! Album storage seam and its Postgres implementation
//!
//! Implementations follow these rules:
//! - No sqlx types in `AlbumStore` signatures
//! - Every fallible operation returns an explicit `DbError`
//! - `delete` reports affected rows, callers decide what zero means

pub mod albums;

use async_trait::async_trait;

use crate::models::{Album, AlbumId, NewAlbum};

pub use albums::AlbumRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("unsupported database scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },

    #[error("database url must look like <scheme>://...")]
    InvalidUrl,
}

impl DbError {
    pub fn album_not_found(id: AlbumId) -> Self {
        Self::NotFound {
            resource: "album",
            id: id.to_string(),
        }
    }
}

/// Storage for the `album` table.
///
/// Shared by every in-flight request; implementations must be safe for
/// concurrent use without outside locking.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums, in storage order.
    async fn list(&self) -> Result<Vec<Album>, DbError>;

    /// One album by id.
    ///
    /// Returns `Err(DbError::NotFound)` if no row matches.
    async fn get(&self, id: AlbumId) -> Result<Album, DbError>;

    /// Insert a row and return it with the storage-assigned id.
    async fn insert(&self, album: NewAlbum) -> Result<Album, DbError>;

    /// Delete by id, returning the number of rows removed.
    async fn delete(&self, id: AlbumId) -> Result<u64, DbError>;
}
