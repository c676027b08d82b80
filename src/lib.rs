//! Music catalog server library
//!
//! An in-memory artists / albums / songs catalog served over HTTP.

pub mod catalog_store;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog_store::{load_seed_store, CatalogStore, DeletePolicy};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
