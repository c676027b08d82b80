use axum::extract::FromRef;

use crate::catalog_store::CatalogStore;
use std::sync::{Arc, Mutex};

use super::routes::RouteTable;
use super::ServerConfig;

/// Requests mutate the store one at a time under this lock.
pub type GuardedCatalogStore = Arc<Mutex<CatalogStore>>;
pub type SharedRouteTable = Arc<RouteTable>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub catalog_store: GuardedCatalogStore,
    pub routes: SharedRouteTable,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog_store: CatalogStore) -> ServerState {
        ServerState {
            config,
            catalog_store: Arc::new(Mutex::new(catalog_store)),
            routes: Arc::new(RouteTable::catalog()),
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogStore {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog_store.clone()
    }
}

impl FromRef<ServerState> for SharedRouteTable {
    fn from_ref(input: &ServerState) -> Self {
        input.routes.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
