use super::models::{AlbumId, ArtistId, EntityKind, SongId};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Artist {0} not found")]
    ArtistNotFound(ArtistId),

    #[error("Album {0} not found")]
    AlbumNotFound(AlbumId),

    #[error("Song {0} not found")]
    SongNotFound(SongId),

    #[error("No {0} identifiers left")]
    IdsExhausted(EntityKind),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
