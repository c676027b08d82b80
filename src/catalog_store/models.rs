//! Catalog entity models.
//!
//! Field names follow the camelCase wire format used by the seed documents
//! and by every JSON response (`artistId`, `albumId`, `trackNumber`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ArtistId = u64;
pub type AlbumId = u64;
pub type SongId = u64;

/// The three entity kinds, each with its own identifier sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Artist,
    Album,
    Song,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Song => "song",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: ArtistId,
    pub name: String,

    /// Albums embedded in the seed record. Read by the artist albums listing,
    /// never written by any handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albums: Option<BTreeMap<AlbumId, Album>>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: AlbumId,
    pub name: String,
    pub artist_id: ArtistId,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub song_id: SongId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<i64>,
    /// Absent for seeded songs that were never filed under an album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<AlbumId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

/// A song together with the album and artist it links to.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct ResolvedSong {
    #[serde(flatten)]
    pub song: Song,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
}

/// Caller-supplied replacement values for an artist edit.
/// `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtistChanges {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlbumChanges {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongChanges {
    pub name: Option<String>,
    pub lyrics: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSong {
    pub name: String,
    pub track_number: Option<i64>,
    pub lyrics: Option<String>,
}

impl Artist {
    /// Rebuilds the record from its prior values and the supplied changes.
    /// The identifier and the seeded albums always come from `self`.
    pub fn merged(&self, changes: ArtistChanges) -> Artist {
        Artist {
            artist_id: self.artist_id,
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            albums: self.albums.clone(),
        }
    }
}

impl Album {
    pub fn merged(&self, changes: AlbumChanges) -> Album {
        Album {
            album_id: self.album_id,
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            artist_id: self.artist_id,
        }
    }
}

impl Song {
    pub fn merged(&self, changes: SongChanges) -> Song {
        Song {
            song_id: self.song_id,
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            track_number: self.track_number,
            album_id: self.album_id,
            lyrics: changes.lyrics.or_else(|| self.lyrics.clone()),
        }
    }
}
