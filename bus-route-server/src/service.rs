//! Query façade over the route index.
//!
//! [`RouteService`] is the single entry point used by the web layer and the
//! binary. It owns the loaded index behind an `Arc`, so clones are cheap and
//! queries from any number of request handlers read the same index.

use std::path::Path;
use std::sync::Arc;

use tracing::error;

use crate::config::{MissingSourcePolicy, ServerConfig};
use crate::domain::StationId;
use crate::index::RouteIndex;
use crate::loader::{self, LoadError};
use crate::source::{LineSource, SourceError};

/// Answers direct-connection queries against a loaded route index.
#[derive(Debug, Clone, Default)]
pub struct RouteService {
    index: Arc<RouteIndex>,
}

impl RouteService {
    /// Wrap an already built index.
    pub fn new(index: RouteIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// A service with no route data, answering `false` to everything.
    pub fn empty() -> Self {
        Self::new(RouteIndex::Empty)
    }

    /// Load routes from a line source.
    pub fn from_source(source: &LineSource) -> Result<Self, LoadError> {
        let store = loader::load(source)?;
        Ok(Self::new(store.into()))
    }

    /// Load routes from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let store = loader::load_file(path)?;
        Ok(Self::new(store.into()))
    }

    /// Load routes as described by the configuration.
    ///
    /// If the route file is not configured, missing or unreadable, the
    /// configured [`MissingSourcePolicy`] decides between failing and
    /// serving an empty index. Invalid route data, including bytes that are
    /// not UTF-8, always fails.
    pub fn from_config(config: &ServerConfig) -> Result<Self, LoadError> {
        let result = match &config.routes_file {
            Some(path) => Self::from_file(path),
            None => Err(LoadError::Source(SourceError::NotConfigured)),
        };

        match (result, config.on_missing_source) {
            (Err(LoadError::Source(e)), MissingSourcePolicy::DegradeToEmpty)
                if e.is_unavailable() =>
            {
                error!(error = %e, "route data unavailable, serving an empty index");
                Ok(Self::empty())
            }
            (result, _) => result,
        }
    }

    /// Is there a route calling at `departure` and later at `arrival`?
    pub fn is_direct_connection(&self, departure: StationId, arrival: StationId) -> bool {
        self.index.is_direct_connection(departure, arrival)
    }

    /// Number of loaded routes.
    pub fn total_routes(&self) -> usize {
        self.index.total_routes()
    }

    /// Number of distinct loaded stations.
    pub fn total_stations(&self) -> usize {
        self.index.total_stations()
    }

    /// The underlying index.
    pub fn index(&self) -> &RouteIndex {
        &self.index
    }
}
