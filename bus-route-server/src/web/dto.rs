//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query parameters for a direct-connection lookup.
#[derive(Debug, Deserialize)]
pub struct DirectRequest {
    /// Departure station id
    pub dep_sid: i32,

    /// Arrival station id
    pub arr_sid: i32,
}

/// Answer to a direct-connection lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectResponse {
    /// Departure station id
    pub dep_sid: i32,

    /// Arrival station id
    pub arr_sid: i32,

    /// Whether one route serves the departure and then the arrival
    pub direct_bus_route: bool,
}

/// Size of the loaded index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Number of routes
    pub routes: usize,

    /// Number of distinct stations
    pub stations: usize,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_response_field_names() {
        let response = DirectResponse {
            dep_sid: 3,
            arr_sid: 6,
            direct_bus_route: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"dep_sid": 3, "arr_sid": 6, "direct_bus_route": true})
        );
    }

    #[test]
    fn direct_request_from_json() {
        let req: DirectRequest = serde_json::from_str(r#"{"dep_sid": -1, "arr_sid": 2}"#).unwrap();
        assert_eq!(req.dep_sid, -1);
        assert_eq!(req.arr_sid, 2);

        assert!(serde_json::from_str::<DirectRequest>(r#"{"dep_sid": 1}"#).is_err());
    }
}
