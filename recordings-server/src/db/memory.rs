//! In-process album store
//!
//! Backs `memory://` URLs and the router tests. Plays the storage engine's
//! part: ids are assigned here, starting at 1 and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AlbumStore, DbError};
use crate::models::{Album, AlbumId, NewAlbum};

#[derive(Default)]
pub struct MemoryAlbumStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    albums: BTreeMap<AlbumId, Album>,
    last_id: i64,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, DbError> {
        let tables = self.inner.read().await;
        Ok(tables.albums.values().cloned().collect())
    }

    async fn get(&self, id: AlbumId) -> Result<Album, DbError> {
        let tables = self.inner.read().await;
        tables
            .albums
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::album_not_found(id))
    }

    async fn insert(&self, album: NewAlbum) -> Result<Album, DbError> {
        let mut tables = self.inner.write().await;
        tables.last_id += 1;
        let album = album.with_id(AlbumId(tables.last_id));
        tables.albums.insert(album.id, album.clone());
        Ok(album)
    }

    async fn delete(&self, id: AlbumId) -> Result<u64, DbError> {
        let mut tables = self.inner.write().await;
        Ok(u64::from(tables.albums.remove(&id).is_some()))
    }
}
