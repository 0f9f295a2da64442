//! Latest-wins search sessions.
//!
//! An interactive caller (for example an autocomplete box) issues a search
//! per keystroke. A session aborts the previous in-flight search whenever a
//! new one starts, so stale results never arrive after fresh ones and an
//! aborted search never writes to the cache.
//!
//! This is library API for callers that embed [`LocationSearch`] directly,
//! such as an in-process autocomplete widget. The HTTP router does not use
//! it: each request there is independent, and an HTTP client cancels by
//! dropping its connection.

use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::trace;

use crate::geocoding::Geocoder;

use super::request::{LocationQuery, SearchResponse};
use super::service::LocationSearch;

/// One caller's sequence of searches; only the newest may complete.
pub struct SearchSession<G> {
    search: Arc<LocationSearch<G>>,
    current: Mutex<Option<AbortHandle>>,
}

impl<G: Geocoder> SearchSession<G> {
    pub fn new(search: Arc<LocationSearch<G>>) -> Self {
        Self {
            search,
            current: Mutex::new(None),
        }
    }

    /// Run `request`, aborting whatever this session was running before.
    ///
    /// Returns `Err(Aborted)` if a later call superseded this one.
    pub async fn run(&self, request: &LocationQuery) -> Result<SearchResponse, Aborted> {
        let (handle, registration) = AbortHandle::new_pair();

        let previous = self
            .current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(handle);
        if let Some(previous) = previous {
            trace!("aborting superseded search");
            previous.abort();
        }

        Abortable::new(self.search.handle(request), registration).await
    }

    /// Abort the in-flight search, if any.
    pub fn cancel(&self) {
        let current = self.current.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(handle) = current {
            handle.abort();
        }
    }
}
