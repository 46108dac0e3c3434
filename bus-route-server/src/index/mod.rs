//! Route index answering direct-connection queries.
//!
//! [`RouteIndex`] is what the rest of the application holds. It is either a
//! loaded [`InMemoryRouteStore`] or the explicit [`RouteIndex::Empty`] value
//! used when the server runs without route data.

mod store;

pub use store::InMemoryRouteStore;

use crate::domain::StationId;

/// A queryable route index.
#[derive(Debug, Default)]
pub enum RouteIndex {
    /// No route data: zero routes, zero stations, never connected.
    #[default]
    Empty,

    /// Routes loaded into memory.
    InMemory(InMemoryRouteStore),
}

impl RouteIndex {
    /// Number of routes in the index.
    pub fn total_routes(&self) -> usize {
        match self {
            RouteIndex::Empty => 0,
            RouteIndex::InMemory(store) => store.total_routes(),
        }
    }

    /// Number of distinct stations in the index.
    pub fn total_stations(&self) -> usize {
        match self {
            RouteIndex::Empty => 0,
            RouteIndex::InMemory(store) => store.total_stations(),
        }
    }

    /// Does a single route call at `departure` and later at `arrival`?
    pub fn is_direct_connection(&self, departure: StationId, arrival: StationId) -> bool {
        match self {
            RouteIndex::Empty => false,
            RouteIndex::InMemory(store) => store.is_direct_connection(departure, arrival),
        }
    }

    /// Returns true if route data was loaded, even if it holds no routes.
    pub fn is_loaded(&self) -> bool {
        matches!(self, RouteIndex::InMemory(_))
    }
}

impl From<InMemoryRouteStore> for RouteIndex {
    fn from(store: InMemoryRouteStore) -> Self {
        RouteIndex::InMemory(store)
    }
}
