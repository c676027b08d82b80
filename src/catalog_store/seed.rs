use super::models::{Album, Artist, Song};
use super::CatalogStore;
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ARTISTS_SEED_FILE: &str = "artists.json";
pub const ALBUMS_SEED_FILE: &str = "albums.json";
pub const SONGS_SEED_FILE: &str = "songs.json";

#[derive(Debug)]
struct SeedFiles {
    artists: PathBuf,
    albums: PathBuf,
    songs: PathBuf,
}

impl SeedFiles {
    fn from_dir(dir: &Path) -> Result<SeedFiles> {
        if !dir.is_dir() {
            bail!("{} is not a valid directory.", dir.display());
        }

        let files = SeedFiles {
            artists: dir.join(ARTISTS_SEED_FILE),
            albums: dir.join(ALBUMS_SEED_FILE),
            songs: dir.join(SONGS_SEED_FILE),
        };

        for file in [&files.artists, &files.albums, &files.songs] {
            if !file.is_file() {
                bail!("Missing seed file {}", file.display());
            }
        }

        Ok(files)
    }
}

fn parse_seed_file<T, F>(path: &Path, id_of: F) -> Result<BTreeMap<u64, T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> u64,
{
    let file_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let parsed: BTreeMap<u64, T> = serde_json::from_str(&file_text)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    for (key, entity) in parsed.iter() {
        let entity_id = id_of(entity);
        if entity_id != *key {
            bail!(
                "Seed file {} stores id {} under key {}",
                path.display(),
                entity_id,
                key
            );
        }
    }
    Ok(parsed)
}

/// Reads `artists.json`, `albums.json` and `songs.json` from `dir`, each a
/// JSON object mapping an identifier to its record.
pub fn load_seed_store<P: AsRef<Path>>(dir: P) -> Result<CatalogStore> {
    let files = SeedFiles::from_dir(dir.as_ref())?;

    let artists = parse_seed_file(&files.artists, |artist: &Artist| artist.artist_id)?;
    let albums = parse_seed_file(&files.albums, |album: &Album| album.album_id)?;
    let songs = parse_seed_file(&files.songs, |song: &Song| song.song_id)?;

    let store = match CatalogStore::with_contents(artists, albums, songs) {
        Ok(store) => store,
        Err(err) => bail!("Seed catalog leaves no room for new records: {}", err),
    };
    info!(
        "Seed catalog has: {} artists, {} albums, {} songs",
        store.get_artists_count(),
        store.get_albums_count(),
        store.get_songs_count()
    );
    Ok(store)
}
