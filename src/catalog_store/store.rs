//! In-memory catalog store.
//!
//! Owns the three keyed collections plus the identifier allocator. The store
//! is the single source of truth for the service; callers serialize access to
//! it (see `server::state::GuardedCatalogStore`).

use super::error::{CatalogError, CatalogResult};
use super::id_allocator::IdAllocator;
use super::models::*;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// What happens to descendants when an artist or album is deleted.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum DeletePolicy {
    /// Only the addressed record is removed. Albums and songs keep their
    /// (now dangling) parent links.
    #[default]
    Detach,
    /// Deleting an artist removes its albums and their songs, deleting an
    /// album removes its songs.
    Cascade,
}

impl std::fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    artists: BTreeMap<ArtistId, Artist>,
    albums: BTreeMap<AlbumId, Album>,
    songs: BTreeMap<SongId, Song>,
    ids: IdAllocator,
    delete_policy: DeletePolicy,
}

impl CatalogStore {
    pub fn new() -> CatalogStore {
        CatalogStore::default()
    }

    /// Builds a store around already-loaded collections. Every map must be
    /// keyed by its entities' own identifiers.
    pub fn with_contents(
        artists: BTreeMap<ArtistId, Artist>,
        albums: BTreeMap<AlbumId, Album>,
        songs: BTreeMap<SongId, Song>,
    ) -> CatalogResult<CatalogStore> {
        let max_key = |keys: Option<&u64>| keys.copied().unwrap_or(0);
        let ids = IdAllocator::starting_after(
            max_key(artists.keys().next_back()),
            max_key(albums.keys().next_back()),
            max_key(songs.keys().next_back()),
        )?;
        Ok(CatalogStore {
            artists,
            albums,
            songs,
            ids,
            delete_policy: DeletePolicy::default(),
        })
    }

    pub fn with_delete_policy(mut self, delete_policy: DeletePolicy) -> CatalogStore {
        self.delete_policy = delete_policy;
        self
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    pub fn get_artists_count(&self) -> usize {
        self.artists.len()
    }

    pub fn get_albums_count(&self) -> usize {
        self.albums.len()
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    // =========================================================================
    // Artists
    // =========================================================================

    pub fn artists(&self) -> &BTreeMap<ArtistId, Artist> {
        &self.artists
    }

    pub fn get_artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    pub fn create_artist(&mut self, name: String) -> CatalogResult<Artist> {
        let artist = Artist {
            artist_id: self.ids.next(EntityKind::Artist)?,
            name,
            albums: None,
        };
        info!("Created artist {} ({})", artist.artist_id, artist.name);
        self.artists.insert(artist.artist_id, artist.clone());
        Ok(artist)
    }

    pub fn update_artist(&mut self, id: ArtistId, changes: ArtistChanges) -> CatalogResult<Artist> {
        let current = self
            .artists
            .get(&id)
            .ok_or(CatalogError::ArtistNotFound(id))?;
        let updated = current.merged(changes);
        self.artists.insert(id, updated.clone());
        debug!("Updated artist {}", id);
        Ok(updated)
    }

    /// Removes the artist if present. Returns the removed record.
    pub fn delete_artist(&mut self, id: ArtistId) -> Option<Artist> {
        let removed = self.artists.remove(&id)?;
        info!("Deleted artist {}", id);
        if self.delete_policy == DeletePolicy::Cascade {
            let album_ids: Vec<AlbumId> = self
                .albums
                .values()
                .filter(|album| album.artist_id == id)
                .map(|album| album.album_id)
                .collect();
            for album_id in album_ids {
                self.remove_album_and_songs(album_id);
            }
        }
        Some(removed)
    }

    /// Albums stored under the artist, merged over the albums embedded in the
    /// artist's seed record.
    pub fn get_artist_albums(&self, id: ArtistId) -> CatalogResult<BTreeMap<AlbumId, Album>> {
        let artist = self.artists.get(&id).ok_or(CatalogError::ArtistNotFound(id))?;
        let mut albums = artist.albums.clone().unwrap_or_default();
        albums.extend(
            self.albums
                .values()
                .filter(|album| album.artist_id == id)
                .map(|album| (album.album_id, album.clone())),
        );
        Ok(albums)
    }

    pub fn get_artist_songs(&self, id: ArtistId) -> CatalogResult<BTreeMap<SongId, Song>> {
        if !self.artists.contains_key(&id) {
            return Err(CatalogError::ArtistNotFound(id));
        }
        Ok(self.collect_songs(|song| {
            song.album_id
                .and_then(|album_id| self.albums.get(&album_id))
                .is_some_and(|album| album.artist_id == id)
        }))
    }

    // =========================================================================
    // Albums
    // =========================================================================

    pub fn get_album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(&id)
    }

    pub fn create_album(&mut self, artist_id: ArtistId, name: String) -> CatalogResult<Album> {
        if !self.artists.contains_key(&artist_id) {
            return Err(CatalogError::ArtistNotFound(artist_id));
        }
        let album = Album {
            album_id: self.ids.next(EntityKind::Album)?,
            name,
            artist_id,
        };
        info!(
            "Created album {} ({}) for artist {}",
            album.album_id, album.name, artist_id
        );
        self.albums.insert(album.album_id, album.clone());
        Ok(album)
    }

    pub fn update_album(&mut self, id: AlbumId, changes: AlbumChanges) -> CatalogResult<Album> {
        let current = self.albums.get(&id).ok_or(CatalogError::AlbumNotFound(id))?;
        let updated = current.merged(changes);
        self.albums.insert(id, updated.clone());
        debug!("Updated album {}", id);
        Ok(updated)
    }

    pub fn delete_album(&mut self, id: AlbumId) -> Option<Album> {
        let removed = match self.delete_policy {
            DeletePolicy::Detach => self.albums.remove(&id),
            DeletePolicy::Cascade => self.remove_album_and_songs(id),
        };
        if removed.is_some() {
            info!("Deleted album {}", id);
        }
        removed
    }

    pub fn get_album_songs(&self, id: AlbumId) -> CatalogResult<BTreeMap<SongId, Song>> {
        if !self.albums.contains_key(&id) {
            return Err(CatalogError::AlbumNotFound(id));
        }
        Ok(self.collect_songs(|song| song.album_id == Some(id)))
    }

    fn remove_album_and_songs(&mut self, id: AlbumId) -> Option<Album> {
        let removed = self.albums.remove(&id)?;
        let before = self.songs.len();
        self.songs.retain(|_, song| song.album_id != Some(id));
        debug!(
            "Cascaded delete of album {} removed {} songs",
            id,
            before - self.songs.len()
        );
        Some(removed)
    }

    // =========================================================================
    // Songs
    // =========================================================================

    pub fn get_song(&self, id: SongId) -> Option<&Song> {
        self.songs.get(&id)
    }

    /// The song joined with its album (through `albumId`) and that album's
    /// artist (through `artistId`).
    pub fn get_resolved_song(&self, id: SongId) -> Option<ResolvedSong> {
        let song = self.songs.get(&id)?;
        let album = song
            .album_id
            .and_then(|album_id| self.albums.get(&album_id))
            .cloned();
        let artist = album
            .as_ref()
            .and_then(|album| self.artists.get(&album.artist_id))
            .cloned();
        Some(ResolvedSong {
            song: song.clone(),
            album,
            artist,
        })
    }

    pub fn get_track_number_songs(&self, track_number: i64) -> BTreeMap<SongId, Song> {
        self.collect_songs(|song| song.track_number == Some(track_number))
    }

    pub fn create_song(&mut self, album_id: AlbumId, new_song: NewSong) -> CatalogResult<Song> {
        if !self.albums.contains_key(&album_id) {
            return Err(CatalogError::AlbumNotFound(album_id));
        }
        let song = Song {
            song_id: self.ids.next(EntityKind::Song)?,
            name: new_song.name,
            track_number: new_song.track_number,
            album_id: Some(album_id),
            lyrics: new_song.lyrics,
        };
        info!(
            "Created song {} ({}) on album {}",
            song.song_id, song.name, album_id
        );
        self.songs.insert(song.song_id, song.clone());
        Ok(song)
    }

    pub fn update_song(&mut self, id: SongId, changes: SongChanges) -> CatalogResult<Song> {
        let current = self.songs.get(&id).ok_or(CatalogError::SongNotFound(id))?;
        let updated = current.merged(changes);
        self.songs.insert(id, updated.clone());
        debug!("Updated song {}", id);
        Ok(updated)
    }

    pub fn delete_song(&mut self, id: SongId) -> Option<Song> {
        let removed = self.songs.remove(&id);
        if removed.is_some() {
            info!("Deleted song {}", id);
        }
        removed
    }

    fn collect_songs<F>(&self, predicate: F) -> BTreeMap<SongId, Song>
    where
        F: Fn(&Song) -> bool,
    {
        self.songs
            .values()
            .filter(|song| predicate(song))
            .map(|song| (song.song_id, song.clone()))
            .collect()
    }
}
