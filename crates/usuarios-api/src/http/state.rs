//! Application state for HTTP handlers.

use std::sync::Arc;

use usuarios_storage::UserStore;

/// Application state shared across all HTTP handlers.
///
/// The store is constructed once at startup and handed to every handler
/// by reference through this struct, rather than living as implicit
/// module-level state. That keeps its lifetime explicit and lets tests
/// build isolated instances.
///
/// # Type Parameters
///
/// * `S` - The storage backend implementing `UserStore`
#[derive(Clone)]
pub struct AppState<S: UserStore> {
    /// The storage backend.
    pub storage: Arc<S>,
}

impl<S: UserStore> AppState<S> {
    /// Creates a new application state around the given store.
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}
