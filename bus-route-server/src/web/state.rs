//! Application state for the web layer.

use crate::service::RouteService;

/// Shared application state.
///
/// Cloned into every request handler; the route index itself is shared.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Direct-connection query service
    pub routes: RouteService,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: RouteService) -> Self {
        Self { routes }
    }
}
