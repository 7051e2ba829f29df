//! Album endpoints
//!
//! One store call per request, two for delete (lookup for the title, then
//! the delete itself with its row count checked).

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{AlbumIdPath, JsonBody};
use crate::http::server::AppState;
use crate::models::{Album, NewAlbum};

/// Plain `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /albums - list all albums
async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.store.list().await?;
    Ok(Json(albums))
}

/// POST /albums - create an album, id assigned by storage
async fn create_album(
    State(state): State<AppState>,
    JsonBody(album): JsonBody<NewAlbum>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let album = state.store.insert(album).await?;
    tracing::info!(id = %album.id, title = %album.title, "album created");

    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /albums/{id} - get a single album
async fn get_album(
    State(state): State<AppState>,
    AlbumIdPath(id): AlbumIdPath,
) -> Result<Json<Album>, ApiError> {
    let album = state.store.get(id).await?;
    Ok(Json(album))
}

/// DELETE /albums/{id} - delete an album
async fn delete_album(
    State(state): State<AppState>,
    AlbumIdPath(id): AlbumIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let album = state.store.get(id).await?;

    // Zero rows means someone else deleted it between the two statements
    if state.store.delete(id).await? == 0 {
        return Err(DbError::album_not_found(id).into());
    }
    tracing::info!(id = %id, title = %album.title, "album deleted");

    Ok(Json(MessageResponse {
        message: format!("Album {} deleted successfully", album.title),
    }))
}

/// Album routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/{id}", get(get_album).delete(delete_album))
}
