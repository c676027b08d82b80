//! Resource handlers, one per (resource, operation) pair.
//!
//! Handlers are synchronous and do no I/O: they read or mutate the catalog
//! store they are handed and produce the status and JSON payload of the reply.

use super::body::RequestBody;
use super::error::ApiError;
use crate::catalog_store::*;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};

pub type Reply = (StatusCode, serde_json::Value);
pub type HandlerResult = Result<Reply, ApiError>;

/// Handler for a route without an identifier segment.
pub type CollectionHandler = fn(&mut CatalogStore, Option<&RequestBody>) -> HandlerResult;

/// Handler for a route carrying one numeric identifier segment.
pub type ItemHandler = fn(&mut CatalogStore, u64, Option<&RequestBody>) -> HandlerResult;

pub const DELETED_MESSAGE: &str = "Successfully deleted";

fn reply<T: Serialize>(status: StatusCode, payload: &T) -> HandlerResult {
    Ok((status, serde_json::to_value(payload)?))
}

fn deleted() -> HandlerResult {
    Ok((StatusCode::OK, json!({ "message": DELETED_MESSAGE })))
}

fn text_field(body: Option<&RequestBody>, key: &str) -> Option<String> {
    body.and_then(|body| body.text(key))
}

fn required_text_field(body: Option<&RequestBody>, key: &'static str) -> Result<String, ApiError> {
    text_field(body, key).ok_or(ApiError::MissingField(key))
}

/// Absent, `null` and blank values read as no value. Anything else must
/// parse as an integer.
fn integer_field(body: Option<&RequestBody>, key: &'static str) -> Result<Option<i64>, ApiError> {
    let Some(body) = body else {
        return Ok(None);
    };
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(_) => body
            .integer(key)
            .map(Some)
            .ok_or(ApiError::InvalidField(key)),
    }
}

// =============================================================================
// Artists
// =============================================================================

pub fn list_artists(store: &mut CatalogStore, _body: Option<&RequestBody>) -> HandlerResult {
    reply(StatusCode::OK, store.artists())
}

pub fn get_artist(store: &mut CatalogStore, id: u64, _body: Option<&RequestBody>) -> HandlerResult {
    let artist = store
        .get_artist(id)
        .ok_or(CatalogError::ArtistNotFound(id))?;
    reply(StatusCode::OK, artist)
}

pub fn create_artist(store: &mut CatalogStore, body: Option<&RequestBody>) -> HandlerResult {
    let name = required_text_field(body, "name")?;
    reply(StatusCode::CREATED, &store.create_artist(name)?)
}

pub fn edit_artist(store: &mut CatalogStore, id: u64, body: Option<&RequestBody>) -> HandlerResult {
    let changes = ArtistChanges {
        name: text_field(body, "name"),
    };
    reply(StatusCode::OK, &store.update_artist(id, changes)?)
}

pub fn delete_artist(store: &mut CatalogStore, id: u64, _body: Option<&RequestBody>) -> HandlerResult {
    store.delete_artist(id);
    deleted()
}

pub fn list_artist_albums(
    store: &mut CatalogStore,
    id: u64,
    _body: Option<&RequestBody>,
) -> HandlerResult {
    reply(StatusCode::OK, &store.get_artist_albums(id)?)
}

pub fn list_artist_songs(
    store: &mut CatalogStore,
    id: u64,
    _body: Option<&RequestBody>,
) -> HandlerResult {
    reply(StatusCode::OK, &store.get_artist_songs(id)?)
}

// =============================================================================
// Albums
// =============================================================================

pub fn get_album(store: &mut CatalogStore, id: u64, _body: Option<&RequestBody>) -> HandlerResult {
    let album = store.get_album(id).ok_or(CatalogError::AlbumNotFound(id))?;
    reply(StatusCode::OK, album)
}

/// `id` is the owning artist.
pub fn create_album(store: &mut CatalogStore, id: u64, body: Option<&RequestBody>) -> HandlerResult {
    let name = required_text_field(body, "name")?;
    reply(StatusCode::CREATED, &store.create_album(id, name)?)
}

pub fn edit_album(store: &mut CatalogStore, id: u64, body: Option<&RequestBody>) -> HandlerResult {
    let changes = AlbumChanges {
        name: text_field(body, "name"),
    };
    reply(StatusCode::OK, &store.update_album(id, changes)?)
}

pub fn delete_album(store: &mut CatalogStore, id: u64, _body: Option<&RequestBody>) -> HandlerResult {
    store.delete_album(id);
    deleted()
}

pub fn list_album_songs(
    store: &mut CatalogStore,
    id: u64,
    _body: Option<&RequestBody>,
) -> HandlerResult {
    reply(StatusCode::OK, &store.get_album_songs(id)?)
}

// =============================================================================
// Songs
// =============================================================================

pub fn list_track_number_songs(
    store: &mut CatalogStore,
    track_number: u64,
    _body: Option<&RequestBody>,
) -> HandlerResult {
    let songs = match i64::try_from(track_number) {
        Ok(track_number) => store.get_track_number_songs(track_number),
        Err(_) => Default::default(),
    };
    reply(StatusCode::OK, &songs)
}

pub fn get_song(store: &mut CatalogStore, id: u64, _body: Option<&RequestBody>) -> HandlerResult {
    let song = store
        .get_resolved_song(id)
        .ok_or(CatalogError::SongNotFound(id))?;
    reply(StatusCode::OK, &song)
}

/// `id` is the album the song is added to.
pub fn create_song(store: &mut CatalogStore, id: u64, body: Option<&RequestBody>) -> HandlerResult {
    let new_song = NewSong {
        name: required_text_field(body, "name")?,
        track_number: integer_field(body, "trackNumber")?,
        lyrics: text_field(body, "lyrics"),
    };
    reply(StatusCode::CREATED, &store.create_song(id, new_song)?)
}

pub fn edit_song(store: &mut CatalogStore, id: u64, body: Option<&RequestBody>) -> HandlerResult {
    let changes = SongChanges {
        name: text_field(body, "name"),
        lyrics: text_field(body, "lyrics"),
    };
    reply(StatusCode::OK, &store.update_song(id, changes)?)
}

pub fn delete_song(store: &mut CatalogStore, id: u64, _body: Option<&RequestBody>) -> HandlerResult {
    store
        .delete_song(id)
        .ok_or(CatalogError::SongNotFound(id))?;
    deleted()
}
