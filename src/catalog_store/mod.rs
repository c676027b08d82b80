mod error;
mod id_allocator;
mod models;
mod seed;
mod store;

pub use error::{CatalogError, CatalogResult};
pub use id_allocator::{IdAllocator, RESERVED_SEED_ID};
pub use models::*;
pub use seed::{load_seed_store, ALBUMS_SEED_FILE, ARTISTS_SEED_FILE, SONGS_SEED_FILE};
pub use store::{CatalogStore, DeletePolicy};
