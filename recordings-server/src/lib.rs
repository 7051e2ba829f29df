//! recordings-server: album catalogue over HTTP
//!
//! A JSON API with create, list, get and delete for the `album` table.
//! Storage is reached through the `AlbumStore` trait so the same router
//! runs against Postgres or an in-process store.

pub mod db;
pub mod http;
pub mod models;

pub use db::{connect, AlbumStore, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Album, AlbumId, NewAlbum};
