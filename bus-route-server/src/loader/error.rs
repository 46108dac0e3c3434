//! Load error types.

use std::fmt;

use crate::domain::{RouteId, StationId};
use crate::source::SourceError;

/// Which size limit a dataset broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Declared number of routes
    Routes,
    /// Stations on a single route
    StationsPerRoute,
    /// Distinct stations across all routes
    StationsTotal,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Limit::Routes => "routes",
            Limit::StationsPerRoute => "stations-per-route",
            Limit::StationsTotal => "stations-total",
        })
    }
}

/// Errors that abort loading route data.
///
/// Every variant is fatal: no index is produced. Line numbers are 1-based and
/// count blank lines.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The route data could not be obtained at all
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A token that must be an integer is not
    #[error("line {line}: expected an integer, found {token:?}")]
    Parse { line: usize, token: String },

    /// A route line has fewer than three tokens
    #[error("line {line}: a route needs an id and at least 2 stations, found {tokens} token(s)")]
    MalformedRoute { line: usize, tokens: usize },

    /// A station appears twice on the same route
    #[error("line {line}: station {station} appears more than once on route {route}")]
    DuplicateStationInRoute {
        line: usize,
        route: RouteId,
        station: StationId,
    },

    /// A size limit was exceeded
    #[error("{limit} limit exceeded: {actual} is larger than {max}")]
    LimitExceeded {
        limit: Limit,
        actual: usize,
        max: usize,
    },

    /// Stored routes differ from the header, due to duplicate route ids or a
    /// wrong number of route lines
    #[error("header declares {declared} route(s) but {stored} distinct route id(s) were read")]
    RouteCountMismatch { declared: i32, stored: usize },
}
