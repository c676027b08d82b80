//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all catalog endpoints.
//!
//! When API routes or request formats change, update only this file.
#![allow(dead_code)]

use super::constants::*;
use reqwest::{Method, Response};
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request with no body
    pub async fn send(&self, method: Method, path: &str) -> Response {
        self.client
            .request(method, self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Sends a request with a JSON body
    pub async fn send_json(&self, method: Method, path: &str, body: &Value) -> Response {
        self.client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Sends a request with a URL-encoded form body
    pub async fn send_form(&self, method: Method, path: &str, fields: &[(&str, &str)]) -> Response {
        self.client
            .request(method, self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Request failed")
    }

    /// Sends a raw body with an explicit content type
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        content_type: &str,
        body: &str,
    ) -> Response {
        self.client
            .request(method, self.url(path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body.to_owned())
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Artists
    // ========================================================================

    /// GET /artists
    pub async fn list_artists(&self) -> Response {
        self.send(Method::GET, "/artists").await
    }

    /// GET /artists/{id}
    pub async fn get_artist(&self, id: u64) -> Response {
        self.send(Method::GET, &format!("/artists/{}", id)).await
    }

    /// POST /artists
    pub async fn create_artist(&self, body: &Value) -> Response {
        self.send_json(Method::POST, "/artists", body).await
    }

    /// PATCH /artists/{id}
    pub async fn patch_artist(&self, id: u64, body: &Value) -> Response {
        self.send_json(Method::PATCH, &format!("/artists/{}", id), body)
            .await
    }

    /// DELETE /artists/{id}
    pub async fn delete_artist(&self, id: u64) -> Response {
        self.send(Method::DELETE, &format!("/artists/{}", id)).await
    }

    /// GET /artists/{id}/albums
    pub async fn get_artist_albums(&self, id: u64) -> Response {
        self.send(Method::GET, &format!("/artists/{}/albums", id))
            .await
    }

    /// GET /artists/{id}/songs
    pub async fn get_artist_songs(&self, id: u64) -> Response {
        self.send(Method::GET, &format!("/artists/{}/songs", id))
            .await
    }

    // ========================================================================
    // Albums
    // ========================================================================

    /// GET /albums/{id}
    pub async fn get_album(&self, id: u64) -> Response {
        self.send(Method::GET, &format!("/albums/{}", id)).await
    }

    /// POST /artists/{artist_id}/albums
    pub async fn create_album(&self, artist_id: u64, body: &Value) -> Response {
        self.send_json(Method::POST, &format!("/artists/{}/albums", artist_id), body)
            .await
    }

    /// PUT /albums/{id}
    pub async fn put_album(&self, id: u64, body: &Value) -> Response {
        self.send_json(Method::PUT, &format!("/albums/{}", id), body)
            .await
    }

    /// DELETE /albums/{id}
    pub async fn delete_album(&self, id: u64) -> Response {
        self.send(Method::DELETE, &format!("/albums/{}", id)).await
    }

    /// GET /albums/{id}/songs
    pub async fn get_album_songs(&self, id: u64) -> Response {
        self.send(Method::GET, &format!("/albums/{}/songs", id)).await
    }

    // ========================================================================
    // Songs
    // ========================================================================

    /// GET /songs/{id}
    pub async fn get_song(&self, id: u64) -> Response {
        self.send(Method::GET, &format!("/songs/{}", id)).await
    }

    /// POST /albums/{album_id}
    pub async fn create_song(&self, album_id: u64, body: &Value) -> Response {
        self.send_json(Method::POST, &format!("/albums/{}", album_id), body)
            .await
    }

    /// PATCH /songs/{id}
    pub async fn patch_song(&self, id: u64, body: &Value) -> Response {
        self.send_json(Method::PATCH, &format!("/songs/{}", id), body)
            .await
    }

    /// DELETE /songs/{id}
    pub async fn delete_song(&self, id: u64) -> Response {
        self.send(Method::DELETE, &format!("/songs/{}", id)).await
    }

    /// GET /trackNumbers/{track_number}/songs
    pub async fn get_track_number_songs(&self, track_number: u64) -> Response {
        self.send(Method::GET, &format!("/trackNumbers/{}/songs", track_number))
            .await
    }
}
