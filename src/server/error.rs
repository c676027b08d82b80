use super::body::DecodeError;
use crate::catalog_store::CatalogError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(#[from] DecodeError),

    /// The request body could not be buffered, e.g. it exceeds the body limit.
    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),

    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Field '{0}' must be an integer")]
    InvalidField(&'static str),

    #[error("{}", catalog_message(.0))]
    Catalog(#[from] CatalogError),

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Catalog store is unavailable")]
    StoreUnavailable,

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn catalog_message(err: &CatalogError) -> String {
    match err {
        CatalogError::ArtistNotFound(_) => "Artist with that ID not found".to_owned(),
        CatalogError::AlbumNotFound(_) => "Album not found".to_owned(),
        CatalogError::SongNotFound(_) => "Song not found".to_owned(),
        CatalogError::IdsExhausted(_) => err.to_string(),
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::MissingField(_) | ApiError::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UnreadableBody(rejection) => rejection.status(),
            ApiError::Catalog(CatalogError::IdsExhausted(_)) => StatusCode::INSUFFICIENT_STORAGE,
            ApiError::Catalog(_) | ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable | ApiError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
