//! Seed catalog fixtures
//!
//! Writes the seed documents the test server loads at startup.

use super::constants::*;
use anyhow::Result;
use music_catalog_server::catalog_store::{ALBUMS_SEED_FILE, ARTISTS_SEED_FILE, SONGS_SEED_FILE};
use serde_json::json;
use tempfile::TempDir;

/// Creates a temporary seeds directory with one artist, album and song
pub fn create_test_seeds() -> Result<TempDir> {
    let dir = TempDir::new()?;

    let artists = json!({
        ARTIST_1_ID.to_string(): { "artistId": ARTIST_1_ID, "name": ARTIST_1_NAME }
    });
    let albums = json!({
        ALBUM_1_ID.to_string(): {
            "albumId": ALBUM_1_ID,
            "name": ALBUM_1_NAME,
            "artistId": ARTIST_1_ID
        }
    });
    let songs = json!({
        SONG_1_ID.to_string(): {
            "songId": SONG_1_ID,
            "name": SONG_1_NAME,
            "trackNumber": SONG_1_TRACK_NUMBER,
            "albumId": ALBUM_1_ID,
            "lyrics": SONG_1_LYRICS
        }
    });

    std::fs::write(dir.path().join(ARTISTS_SEED_FILE), artists.to_string())?;
    std::fs::write(dir.path().join(ALBUMS_SEED_FILE), albums.to_string())?;
    std::fs::write(dir.path().join(SONGS_SEED_FILE), songs.to_string())?;

    Ok(dir)
}
