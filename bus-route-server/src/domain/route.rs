//! Route identifier type.

use std::fmt;

use super::error::InvalidId;

/// A bus route identifier, unique across a loaded dataset.
///
/// # Examples
///
/// ```
/// use bus_route_server::domain::RouteId;
///
/// let route = RouteId::parse("7").unwrap();
/// assert_eq!(route.get(), 7);
/// assert!(RouteId::parse("seven").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(i32);

impl RouteId {
    /// Wrap a raw route id.
    pub const fn new(id: i32) -> Self {
        RouteId(id)
    }

    /// Parse a route id from a base-10 token.
    pub fn parse(token: &str) -> Result<Self, InvalidId> {
        token
            .parse::<i32>()
            .map(RouteId)
            .map_err(|_| InvalidId::new("route", token))
    }

    /// Returns the raw id.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
