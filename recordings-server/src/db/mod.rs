//! Database layer - connection pool, storage trait and implementations
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Every statement is parameterized
//! - Handlers see `AlbumStore`, never sqlx types
//! - The storage engine assigns ids, the service never does

pub mod memory;
pub mod pool;
pub mod repos;

use std::sync::Arc;

pub use memory::MemoryAlbumStore;
pub use pool::{create_pool, ping};
pub use repos::*;

/// URL scheme selecting the in-process store.
pub const MEMORY_SCHEME: &str = "memory";

/// Open the store named by `database_url`, choosing the driver by scheme.
///
/// - `postgres://` / `postgresql://` - pooled Postgres, checked with a ping
/// - `memory://` - empty in-process store, lost on exit
///
/// # Errors
///
/// Returns an error for unknown schemes or when the database is unreachable.
pub async fn connect(database_url: &str) -> Result<Arc<dyn AlbumStore>, DbError> {
    let (scheme, _) = database_url
        .split_once("://")
        .ok_or(DbError::InvalidUrl)?;

    match scheme {
        "postgres" | "postgresql" => {
            let pool = create_pool(database_url).await?;
            ping(&pool).await?;
            tracing::info!(driver = scheme, "Connected to database");
            Ok(Arc::new(AlbumRepo::new(pool)))
        }
        MEMORY_SCHEME => {
            tracing::warn!("Using in-memory album store, data is not persisted");
            Ok(Arc::new(MemoryAlbumStore::new()))
        }
        other => Err(DbError::UnsupportedScheme {
            scheme: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_scheme_opens_empty_store() {
        let store = connect("memory://").await.ok().expect("memory store");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_scheme() {
        let result = connect("mysql://root@127.0.0.1:3306/recordings").await;
        assert!(matches!(
            result,
            Err(DbError::UnsupportedScheme { ref scheme }) if scheme == "mysql"
        ));
    }

    #[tokio::test]
    async fn rejects_url_without_scheme() {
        assert!(matches!(connect("recordings").await, Err(DbError::InvalidUrl)));
    }
}
