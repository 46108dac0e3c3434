//! In-memory dual index of routes and stations.
//!
//! The store keeps two views of the same route set:
//! - route id -> ordered stations, for direction checks
//! - station id -> routes serving it, for candidate lookups
//!
//! A direct-connection query intersects the route sets of the two stations
//! and only scans the station order of routes that serve both.

use std::collections::HashSet;

use dashmap::DashMap;

use crate::domain::{RouteId, StationId};

/// Concurrent in-memory route store.
///
/// `store_route` takes `&self` so that many loader threads can insert at
/// once. Inserting into a station's route set goes through the map's entry
/// API, which holds the shard lock across the create-if-absent and the
/// insert, so two routes sharing a station never lose each other.
///
/// Queries are pure reads. Callers must not interleave `store_route` with
/// queries; the store is populated once and then only read.
#[derive(Debug, Default)]
pub struct InMemoryRouteStore {
    /// Route id -> stations in direction of travel.
    routes: DashMap<RouteId, Vec<StationId>>,

    /// Station id -> every route that calls at it.
    stations: DashMap<StationId, HashSet<RouteId>>,
}

impl InMemoryRouteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a route and register it with each of its stations.
    ///
    /// Storing an id that already exists replaces its station sequence. The
    /// route count is unchanged in that case, which is how the loader
    /// detects duplicate ids.
    pub fn store_route(&self, route_id: RouteId, stations: Vec<StationId>) {
        for &station in &stations {
            self.stations.entry(station).or_default().insert(route_id);
        }
        self.routes.insert(route_id, stations);
    }

    /// Number of distinct routes stored.
    pub fn total_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of distinct stations across all stored routes.
    pub fn total_stations(&self) -> usize {
        self.stations.len()
    }

    /// Does some route call at `departure` and later at `arrival`?
    ///
    /// Unknown stations are never connected to anything.
    pub fn is_direct_connection(&self, departure: StationId, arrival: StationId) -> bool {
        if departure == arrival {
            return false;
        }

        self.candidate_routes(departure, arrival)
            .into_iter()
            .any(|route_id| {
                self.routes
                    .get(&route_id)
                    .is_some_and(|stations| serves_in_order(&stations, departure, arrival))
            })
    }

    /// Stations of a route in direction of travel.
    pub fn route(&self, route_id: RouteId) -> Option<Vec<StationId>> {
        self.routes.get(&route_id).map(|stations| stations.clone())
    }

    /// Routes calling at a station, in ascending id order.
    pub fn routes_serving(&self, station: StationId) -> Vec<RouteId> {
        let mut routes: Vec<RouteId> = self
            .stations
            .get(&station)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        routes.sort_unstable();
        routes
    }

    /// Routes serving both stations.
    ///
    /// Holds at most one guard on `stations` at a time.
    fn candidate_routes(&self, a: StationId, b: StationId) -> Vec<RouteId> {
        let len = |station: StationId| self.stations.get(&station).map(|routes| routes.len());
        let (Some(len_a), Some(len_b)) = (len(a), len(b)) else {
            return Vec::new();
        };

        // Copy out the smaller set, then probe the larger one
        let (small, large) = if len_a <= len_b { (a, b) } else { (b, a) };
        let Some(probe) = self
            .stations
            .get(&small)
            .map(|routes| routes.iter().copied().collect::<Vec<_>>())
        else {
            return Vec::new();
        };
        let Some(large) = self.stations.get(&large) else {
            return Vec::new();
        };

        probe
            .into_iter()
            .filter(|route_id| large.contains(route_id))
            .collect()
    }
}

/// Scan a route in order: `departure` must be seen first, `arrival` after it.
fn serves_in_order(stations: &[StationId], departure: StationId, arrival: StationId) -> bool {
    let mut remaining = stations.iter();
    for &station in remaining.by_ref() {
        if station == arrival {
            return false;
        }
        if station == departure {
            return remaining.any(|&s| s == arrival);
        }
    }
    false
}
