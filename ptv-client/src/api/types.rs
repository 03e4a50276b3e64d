//! PTV API response DTOs.
//!
//! These types map directly to the v3 JSON responses. Only the fields the
//! projections use are modelled. The API sometimes omits fields and
//! sometimes sends explicit nulls, so optional data is `Option` throughout.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Response from `/v3/route_types`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTypesResponse {
    pub route_types: Option<Vec<RouteTypeDto>>,
}

/// A transport mode.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteTypeDto {
    /// Numeric mode identifier (0 = train, 1 = tram, 2 = bus, ...).
    pub route_type: u32,

    /// Human-readable mode name.
    pub route_type_name: String,
}

/// Response from `/v3/routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesResponse {
    pub routes: Option<Vec<RouteDto>>,
}

/// A route in the routes listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    pub route_id: u32,

    pub route_type: u32,

    pub route_name: Option<String>,

    /// Printed route number. Usually a string, empty for unnumbered modes;
    /// kept as raw JSON because its type is not reliable.
    #[serde(default)]
    pub route_number: Value,

    pub route_gtfs_id: Option<String>,

    pub route_service_status: Option<RouteServiceStatus>,
}

/// Service status attached to a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteServiceStatus {
    /// Status text, e.g. "Good Service".
    pub description: String,

    /// When the status was last updated (ISO 8601).
    pub timestamp: Option<String>,
}

/// Response from `/v3/directions/route/{route_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub directions: Option<Vec<DirectionDto>>,
}

/// A direction of travel on a route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionDto {
    pub direction_id: u32,

    pub direction_name: String,

    pub route_id: Option<u32>,

    pub route_type: Option<u32>,
}

/// Response from `/v3/stops/route/{route_id}/route_type/{route_type}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopsResponse {
    pub stops: Option<Vec<StopOnRouteDto>>,
}

/// A stop served by a route.
#[derive(Debug, Clone, Deserialize)]
pub struct StopOnRouteDto {
    pub stop_id: u32,

    pub stop_name: String,

    pub stop_latitude: f64,

    pub stop_longitude: f64,

    /// Position along the route for the requested direction.
    pub stop_sequence: Option<u32>,

    pub stop_suburb: Option<String>,
}

/// Response from `/v3/runs/route/{route_id}/route_type/{route_type}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunsResponse {
    pub runs: Option<Vec<RunDto>>,
}

/// A run of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RunDto {
    /// Opaque run reference.
    pub run_ref: String,

    pub destination_name: Option<String>,

    pub direction_id: u32,

    pub route_id: Option<u32>,

    /// Run status, e.g. "scheduled".
    pub status: Option<String>,
}

/// Response from `/v3/pattern/run/{run_ref}/route_type/{route_type}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternResponse {
    /// Departures in chronological order.
    pub departures: Option<Vec<DepartureDto>>,

    /// Stop details, keyed by stop ID as a string. Only present when the
    /// request expanded stops.
    pub stops: Option<HashMap<String, StopDto>>,
}

/// One departure in a stopping pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    pub stop_id: u32,

    pub run_ref: Option<String>,

    /// Scheduled departure (ISO 8601, UTC).
    pub scheduled_departure_utc: Option<String>,

    /// Estimated departure (ISO 8601, UTC), when realtime data exists.
    pub estimated_departure_utc: Option<String>,

    pub departure_sequence: Option<u32>,

    /// Stops passed without servicing between this departure and the next.
    /// Only present when the request asked for skipped stops.
    pub skipped_stops: Option<Vec<StopDto>>,
}

/// Basic stop details.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    pub stop_id: u32,

    pub stop_name: String,

    pub stop_latitude: f64,

    pub stop_longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_number_tolerates_missing_and_null() {
        let route: RouteDto =
            serde_json::from_str(r#"{"route_id":1,"route_type":0,"route_name":"Alamein"}"#).unwrap();
        assert!(route.route_number.is_null());

        let route: RouteDto =
            serde_json::from_str(r#"{"route_id":1,"route_type":0,"route_number":null}"#).unwrap();
        assert!(route.route_number.is_null());
    }

    #[test]
    fn pattern_with_null_skipped_stops() {
        let json = r#"{
            "departures": [
                {"stop_id": 1071, "run_ref": "1", "scheduled_departure_utc": null, "skipped_stops": null}
            ],
            "stops": {}
        }"#;
        let pattern: PatternResponse = serde_json::from_str(json).unwrap();
        let departures = pattern.departures.unwrap();
        assert_eq!(departures.len(), 1);
        assert!(departures[0].skipped_stops.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "route_types": [
                {"route_type_name": "Train", "route_type": 0, "extra": true}
            ],
            "status": {"version": "3.0", "health": 1}
        }"#;
        let response: RouteTypesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.route_types.unwrap()[0].route_type_name, "Train");
    }
}
