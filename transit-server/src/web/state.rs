//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedCatalog;
use crate::favorites::FavoritesStore;

/// Shared application state.
///
/// Contains the services request handlers need.
#[derive(Clone)]
pub struct AppState {
    /// Transit catalog with cached nearby lookups
    pub catalog: Arc<CachedCatalog>,

    /// The user's favorites
    pub favorites: FavoritesStore,
}

impl AppState {
    pub fn new(catalog: CachedCatalog, favorites: FavoritesStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            favorites,
        }
    }
}
