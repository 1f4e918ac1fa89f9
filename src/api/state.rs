use std::sync::Arc;

use crate::services::poster::PosterResolver;
use crate::store::Catalog;

/// Shared application state.
///
/// The catalog is loaded once at startup and never mutated, so it is
/// shared read-only with no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub posters: Arc<dyn PosterResolver>,
}

impl AppState {
    pub fn new(catalog: Catalog, posters: Arc<dyn PosterResolver>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            posters,
        }
    }
}
