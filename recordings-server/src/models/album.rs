//! Album record and its request-side shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Database-assigned album identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct AlbumId(pub i64);

impl AlbumId {
    /// Parse an id taken from a URL path segment.
    ///
    /// # Example
    /// ```
    /// use recordings_server::models::AlbumId;
    ///
    /// assert_eq!(AlbumId::parse("42").unwrap(), AlbumId(42));
    /// assert!(AlbumId::parse("42abc").is_err());
    /// assert!(AlbumId::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "album id" });
        }

        s.parse::<i64>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "album id",
            reason: "expected an integer",
        })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for AlbumId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted album row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Create payload.
///
/// Unknown fields, including any client-supplied `id`, are ignored; the
/// storage engine assigns the id on insert. No checks beyond decoding:
/// empty strings and negative prices are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    /// Attach the id assigned by storage.
    pub fn with_id(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}
