mod body;
pub mod config;
mod error;
pub mod handlers;
mod http_layers;
pub mod routes;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;

pub use body::{decode_body, DecodeError, RequestBody, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE};
pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::{HandlerResult, Reply, DELETED_MESSAGE};
pub use http_layers::*;
pub use routes::{PathMatch, PathPattern, Route, RouteTable};
pub use server::{make_app, run_server};
