//! Domain types for the bus route index.
//!
//! Routes and stations are plain integer identities. The limits below bound
//! the size of any dataset the loader accepts.

mod error;
mod route;
mod station;

pub use error::InvalidId;
pub use route::RouteId;
pub use station::StationId;

/// Upper limit for the number of bus routes in one dataset.
pub const MAX_ROUTES: usize = 100_000;

/// Upper limit for the number of distinct stations across all routes.
pub const MAX_STATIONS: usize = 1_000_000;

/// Upper limit for the number of stations on a single route.
pub const MAX_STATIONS_PER_ROUTE: usize = 1_000;
