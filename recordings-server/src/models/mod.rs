//! Domain models with validation at construction
//!
//! Path input is parsed when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod album;
pub mod validation;

pub use album::{Album, AlbumId, NewAlbum};
pub use validation::ValidationError;
