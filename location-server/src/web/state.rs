//! Application state for the web layer.

use std::sync::Arc;

use crate::search::LocationSearch;

/// Shared application state.
pub struct AppState<G> {
    /// Location search service
    pub search: Arc<LocationSearch<G>>,
}

impl<G> AppState<G> {
    /// Create a new app state.
    pub fn new(search: LocationSearch<G>) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
        }
    }
}
