use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, Method, Uri},
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower::ServiceBuilder;
use tracing::{debug, info, warn};

use super::{decode_body, log_requests, state::*, ApiError, ServerConfig};
use crate::catalog_store::CatalogStore;

/// Single entry point for every request: decode the body, match the route
/// table, run the handler against the locked store.
async fn dispatch_request(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    payload: Result<Bytes, BytesRejection>,
) -> Response {
    let payload = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Could not read body of {} {}: {}", method, uri.path(), rejection);
            return ApiError::from(rejection).into_response();
        }
    };
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let body = match decode_body(content_type, &payload) {
        Ok(body) => body,
        Err(err) => {
            warn!("Rejecting {} {}: {}", method, uri.path(), err);
            return ApiError::from(err).into_response();
        }
    };
    if let Some(body) = &body {
        debug!("Request body: {:?}", body);
    }

    let result = match state.catalog_store.lock() {
        Ok(mut store) => state
            .routes
            .dispatch(&mut store, &method, uri.path(), body.as_ref()),
        Err(_) => Err(ApiError::StoreUnavailable),
    };

    match result {
        Ok((status, payload)) => (status, Json(payload)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn make_app(config: ServerConfig, catalog_store: CatalogStore) -> Router {
    let state = ServerState::new(config, catalog_store);

    Router::new()
        .fallback(dispatch_request)
        .layer(ServiceBuilder::new().layer(middleware::from_fn_with_state(
            state.clone(),
            log_requests,
        )))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(catalog_store: CatalogStore, config: ServerConfig) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, catalog_store);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server is listening on {}", address);

    Ok(axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?)
}
