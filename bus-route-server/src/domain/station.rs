//! Station identifier type.

use std::fmt;

use super::error::InvalidId;

/// A bus station identifier.
///
/// Stations carry no data beyond their identity and only exist by virtue of
/// appearing on at least one route.
///
/// # Examples
///
/// ```
/// use bus_route_server::domain::StationId;
///
/// let station = StationId::parse("42").unwrap();
/// assert_eq!(station.get(), 42);
///
/// // Non-numeric tokens are rejected
/// assert!(StationId::parse("forty-two").is_err());
///
/// // So are values outside the 32-bit range
/// assert!(StationId::parse("2147483648").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(i32);

impl StationId {
    /// Wrap a raw station id.
    pub const fn new(id: i32) -> Self {
        StationId(id)
    }

    /// Parse a station id from a base-10 token.
    pub fn parse(token: &str) -> Result<Self, InvalidId> {
        token
            .parse::<i32>()
            .map(StationId)
            .map_err(|_| InvalidId::new("station", token))
    }

    /// Returns the raw id.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
