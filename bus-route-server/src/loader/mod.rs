//! Loading and validation of route data.
//!
//! Input is line oriented:
//!
//! ```text
//! <number of routes N>
//! <route id> <station> <station> ...    (N lines)
//! ```
//!
//! Blank lines are ignored everywhere. The header is read first, then the
//! route lines are parsed and stored in parallel. Each route is keyed by its
//! own id and station membership is a set, so the order in which lines are
//! processed does not affect the result. Once every line is stored, the
//! route count and total station count are checked against the limits.

mod error;
mod parse;

pub use error::{Limit, LoadError};

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{MAX_ROUTES, MAX_STATIONS};
use crate::index::InMemoryRouteStore;
use crate::source::{LineSource, is_blank};

use parse::{parse_header, parse_route_line};

/// Load and validate route data from a line source.
///
/// Any violation aborts the whole load and the partially built store is
/// dropped. When several lines are invalid, which of their errors is
/// reported is unspecified.
pub fn load(source: &LineSource) -> Result<InMemoryRouteStore, LoadError> {
    let started = Instant::now();

    let declared = read_header(source)?;
    if declared > 0 && declared as usize > MAX_ROUTES {
        return Err(LoadError::LimitExceeded {
            limit: Limit::Routes,
            actual: declared as usize,
            max: MAX_ROUTES,
        });
    }
    debug!(declared, "read route data header");

    // (1-based line number, text) of every route line
    let body: Vec<(usize, &str)> = source
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, line)| !is_blank(line))
        .skip(1)
        .map(|(idx, line)| (idx + 1, line.as_str()))
        .collect();

    let store = InMemoryRouteStore::new();
    body.par_iter().try_for_each(|&(line_no, line)| {
        let route = parse_route_line(line_no, line)?;
        store.store_route(route.id, route.stations);
        Ok::<_, LoadError>(())
    })?;

    let stored = store.total_routes();
    if i64::from(declared) != stored as i64 {
        return Err(LoadError::RouteCountMismatch { declared, stored });
    }

    let stations = store.total_stations();
    if stations > MAX_STATIONS {
        return Err(LoadError::LimitExceeded {
            limit: Limit::StationsTotal,
            actual: stations,
            max: MAX_STATIONS,
        });
    }

    info!(
        routes = stored,
        stations,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route data loaded"
    );
    Ok(store)
}

/// Read a route file and load it.
///
/// A missing or unreadable file is reported as [`LoadError::Source`].
pub fn load_file(path: impl AsRef<Path>) -> Result<InMemoryRouteStore, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading route data");
    let source = LineSource::from_path(path)?;
    load(&source)
}

/// The declared route count from the first non-blank line.
fn read_header(source: &LineSource) -> Result<i32, LoadError> {
    let header = source
        .lines()
        .enumerate()
        .find(|(_, line)| !is_blank(line));

    match header {
        Some((idx, line)) => parse_header(idx + 1, line),
        None => Err(LoadError::Parse {
            line: 1,
            token: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteId, StationId};

    fn load_lines(lines: &[&str]) -> Result<InMemoryRouteStore, LoadError> {
        load(&LineSource::from_lines(lines.iter().copied()))
    }

    fn connected(store: &InMemoryRouteStore, a: i32, b: i32) -> bool {
        store.is_direct_connection(StationId::new(a), StationId::new(b))
    }

    /// `routes` lines of `stations` consecutive, non-overlapping station ids.
    fn routes_by_stations(routes: usize, stations: usize) -> Vec<String> {
        let mut lines = vec![routes.to_string()];
        let mut next_station = 0;
        for route in 1..=routes {
            let ids: Vec<String> = (next_station..next_station + stations)
                .map(|id| id.to_string())
                .collect();
            lines.push(format!("{} {}", route, ids.join(" ")));
            next_station += stations;
        }
        lines
    }

    #[test]
    fn loads_two_routes() {
        let store = load(&LineSource::from_text("2\n1 10 20 30\n2 20 40\n")).unwrap();

        assert_eq!(store.total_routes(), 2);
        assert_eq!(store.total_stations(), 4);
        assert!(connected(&store, 10, 30));
        assert!(connected(&store, 20, 30));
        assert!(connected(&store, 20, 40));
        assert!(!connected(&store, 40, 20));
        assert!(!connected(&store, 10, 40));
    }

    #[test]
    fn keeps_station_order() {
        let store = load_lines(&["1", "9 3 1 2"]).unwrap();
        assert_eq!(
            store.route(RouteId::new(9)),
            Some(vec![
                StationId::new(3),
                StationId::new(1),
                StationId::new(2)
            ])
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let store = load_lines(&["", "  ", "2", "", "1 1 2", "\t", "2 2 3", ""]).unwrap();
        assert_eq!(store.total_routes(), 2);
        assert!(connected(&store, 1, 2));
        assert!(connected(&store, 2, 3));
    }

    #[test]
    fn windows_line_endings() {
        let store = load(&LineSource::from_text("1\r\n4 5 6\r\n")).unwrap();
        assert_eq!(store.total_routes(), 1);
        assert!(connected(&store, 5, 6));
    }

    #[test]
    fn empty_header_is_a_parse_error() {
        let err = load_lines(&[""]).unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref token, .. } if token.is_empty()));

        let err = load(&LineSource::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn non_numeric_header_is_a_parse_error() {
        let err = load_lines(&["not a number"]).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn too_many_declared_routes() {
        let err = load_lines(&["100001"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::LimitExceeded {
                limit: Limit::Routes,
                actual: 100_001,
                max: 100_000
            }
        ));
    }

    #[test]
    fn fewer_lines_than_declared() {
        let err = load_lines(&["5", "1 3 2", "2 3 2", "3 3 2", "4 3 2"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::RouteCountMismatch {
                declared: 5,
                stored: 4
            }
        ));
    }

    #[test]
    fn more_lines_than_declared() {
        let err = load_lines(&["1", "1 3 2", "2 3 2"]).unwrap_err();
        assert!(matches!(err, LoadError::RouteCountMismatch { declared: 1, stored: 2 }));
    }

    #[test]
    fn route_needs_at_least_three_integers() {
        let err = load_lines(&["4", "0 1 2", "2 1 2", "3 1 2", "0 2"]).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRoute { line: 5, tokens: 2 }));
    }

    #[test]
    fn duplicate_route_ids() {
        let err = load_lines(&["4", "0 1 2", "2 1 2", "3 1 2", "0 1 2"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::RouteCountMismatch {
                declared: 4,
                stored: 3
            }
        ));
    }

    #[test]
    fn duplicate_station_in_route() {
        let err = load_lines(&["5", "0 1 2", "2 1 2", "3 1 2", "4 1 2", "5 1 2 1"]).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateStationInRoute { line: 6, .. }));

        let err = load(&LineSource::from_text("1\n1 1 2 3 2")).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateStationInRoute { .. }));
    }

    #[test]
    fn bad_station_token() {
        let err = load_lines(&["2", "1 1 2", "2 3 x4"]).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, ref token } if token == "x4"));
    }

    #[test]
    fn too_many_stations_on_one_route() {
        let ids: Vec<String> = (0..1_002).map(|i: i32| i.to_string()).collect();
        let line = ids.join(" ");
        let err = load_lines(&["1", line.as_str()]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::LimitExceeded {
                limit: Limit::StationsPerRoute,
                ..
            }
        ));
    }

    #[test]
    fn too_many_stations_in_total() {
        let lines = routes_by_stations(1_001, 1_000);
        let err = load(&LineSource::from_lines(lines)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::LimitExceeded {
                limit: Limit::StationsTotal,
                actual: 1_001_000,
                max: 1_000_000
            }
        ));
    }

    #[test]
    fn station_total_at_limit_is_accepted() {
        let lines = routes_by_stations(1_000, 1_000);
        let store = load(&LineSource::from_lines(lines)).unwrap();
        assert_eq!(store.total_routes(), 1_000);
        assert_eq!(store.total_stations(), MAX_STATIONS);
    }

    #[test]
    fn zero_routes() {
        let store = load_lines(&["0"]).unwrap();
        assert_eq!(store.total_routes(), 0);
        assert_eq!(store.total_stations(), 0);
    }

    #[test]
    fn negative_header_is_a_count_mismatch() {
        let err = load_lines(&["-1"]).unwrap_err();
        assert!(matches!(err, LoadError::RouteCountMismatch { declared: -1, stored: 0 }));
    }

    #[test]
    fn load_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("routes.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Source(_)));
    }

    #[test]
    fn load_file_reads_routes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.txt");
        std::fs::write(&path, "3\n0 0 1 2 3 4\n1 3 1 6 5\n2 0 6 4\n").unwrap();

        let store = load_file(&path).unwrap();
        assert_eq!(store.total_routes(), 3);
        assert_eq!(store.total_stations(), 7);
        assert!(connected(&store, 3, 6));
        assert!(connected(&store, 0, 4));
        assert!(!connected(&store, 4, 0));
    }
}
