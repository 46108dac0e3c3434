//! Parsing of individual input lines.

use std::collections::HashSet;

use super::error::{Limit, LoadError};
use crate::domain::{MAX_STATIONS_PER_ROUTE, RouteId, StationId};

/// A validated route line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RouteLine {
    pub id: RouteId,
    pub stations: Vec<StationId>,
}

/// Parse the declared route count from the header line.
pub(super) fn parse_header(line_no: usize, line: &str) -> Result<i32, LoadError> {
    let token = line.trim();
    token.parse::<i32>().map_err(|_| LoadError::Parse {
        line: line_no,
        token: token.to_string(),
    })
}

/// Parse and validate one route line: `<route id> <station> <station> ...`.
///
/// Station order is kept. All tokens are parsed before duplicates are
/// checked, so a bad token wins over a repeated station.
pub(super) fn parse_route_line(line_no: usize, line: &str) -> Result<RouteLine, LoadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(LoadError::MalformedRoute {
            line: line_no,
            tokens: tokens.len(),
        });
    }

    let parse_error = |token: &str| LoadError::Parse {
        line: line_no,
        token: token.to_string(),
    };

    let id = RouteId::parse(tokens[0]).map_err(|e| parse_error(e.token()))?;
    let stations = tokens[1..]
        .iter()
        .map(|token| StationId::parse(token).map_err(|e| parse_error(e.token())))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(stations.len());
    if let Some(&station) = stations.iter().find(|&&station| !seen.insert(station)) {
        return Err(LoadError::DuplicateStationInRoute {
            line: line_no,
            route: id,
            station,
        });
    }

    if stations.len() > MAX_STATIONS_PER_ROUTE {
        return Err(LoadError::LimitExceeded {
            limit: Limit::StationsPerRoute,
            actual: stations.len(),
            max: MAX_STATIONS_PER_ROUTE,
        });
    }

    Ok(RouteLine { id, stations })
}
