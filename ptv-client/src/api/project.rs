//! Projection from PTV DTOs to domain types.
//!
//! Each function is pure: it takes a decoded response and returns the
//! normalized collection, reproducing the quirks of the upstream data
//! (last-wins duplicates, loosely-typed route numbers, unordered stops).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::{
    Coordinates, DirectionId, Directions, PatternStop, Route, RouteId, RouteNumber, RouteTypeId,
    RouteTypes, RoutesByType, Run, RunRef, Runs, Stop, StopId,
};

use super::types::{
    DirectionsResponse, PatternResponse, RouteDto, RouteTypesResponse, RoutesResponse, RunsResponse,
    StopDto, StopsResponse,
};

/// Error during DTO to domain projection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// The JSON body does not have the expected shape
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// A departure refers to a stop missing from the stops table
    #[error("departure at stop {0} has no entry in the stops table")]
    UnknownStop(StopId),
}

/// Decode a JSON body into a response DTO.
pub fn decode<T: DeserializeOwned>(body: &Value) -> Result<T, ProjectionError> {
    <T as Deserialize>::deserialize(body).map_err(|e| ProjectionError::Shape(e.to_string()))
}

/// Flatten the route types listing into ID -> name.
///
/// A repeated ID overwrites the earlier name.
pub fn project_route_types(response: &RouteTypesResponse) -> RouteTypes {
    let mut types = RouteTypes::default();
    for dto in response.route_types.as_deref().unwrap_or(&[]) {
        types.insert(RouteTypeId(dto.route_type), dto.route_type_name.clone());
    }
    types
}

/// Group the routes listing by route type, then by route ID.
pub fn project_routes(response: &RoutesResponse) -> RoutesByType {
    let mut routes = RoutesByType::default();
    for dto in response.routes.as_deref().unwrap_or(&[]) {
        routes.insert(route_from_dto(dto));
    }
    routes
}

fn route_from_dto(dto: &RouteDto) -> Route {
    Route {
        id: RouteId(dto.route_id),
        number: RouteNumber::from_json(&dto.route_number),
        name: dto.route_name.clone().unwrap_or_default(),
        status: dto
            .route_service_status
            .as_ref()
            .map(|s| s.description.clone())
            .unwrap_or_default(),
        route_type: RouteTypeId(dto.route_type),
        gtfs_id: dto.route_gtfs_id.clone(),
    }
}

/// Flatten the directions listing into ID -> name.
pub fn project_directions(response: &DirectionsResponse) -> Directions {
    response
        .directions
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|dto| (DirectionId(dto.direction_id), dto.direction_name.clone()))
        .collect()
}

/// Project the stops of a route.
///
/// When the stops were requested for a direction, they are ordered by
/// ascending stop sequence (stops without one go last, in listing order).
/// Otherwise the listing order is kept, since sequences are meaningless.
pub fn project_stops(response: &StopsResponse, direction: Option<DirectionId>) -> Vec<Stop> {
    let mut stops: Vec<Stop> = response
        .stops
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|dto| Stop {
            id: StopId(dto.stop_id),
            name: dto.stop_name.clone(),
            coordinates: Coordinates::new(dto.stop_latitude, dto.stop_longitude),
            sequence: dto.stop_sequence,
            suburb: dto.stop_suburb.clone(),
        })
        .collect();

    if direction.is_some() {
        stops.sort_by_key(|stop| (stop.sequence.is_none(), stop.sequence));
    }

    stops
}

/// Flatten the runs listing into reference -> run.
///
/// Runs with an unusable reference are skipped with a warning rather than
/// failing the whole listing.
pub fn project_runs(response: &RunsResponse) -> Runs {
    let mut runs = Runs::new();
    for dto in response.runs.as_deref().unwrap_or(&[]) {
        let reference = match RunRef::new(dto.run_ref.clone()) {
            Ok(reference) => reference,
            Err(e) => {
                warn!(run_ref = %dto.run_ref, error = %e, "skipping run");
                continue;
            }
        };
        runs.insert(
            reference.clone(),
            Run {
                reference,
                destination_name: dto.destination_name.clone().unwrap_or_default(),
                direction_id: DirectionId(dto.direction_id),
            },
        );
    }
    runs
}

/// Project a run's stopping pattern.
///
/// Departures are emitted in the order received, each looked up in the
/// `stops` table. With `include_skipped`, the stops a departure skips
/// follow it directly, using their own embedded details.
pub fn project_pattern(
    response: &PatternResponse,
    include_skipped: bool,
) -> Result<Vec<PatternStop>, ProjectionError> {
    let lookup: HashMap<StopId, &StopDto> = response
        .stops
        .as_ref()
        .map(|stops| stops.values().map(|s| (StopId(s.stop_id), s)).collect())
        .unwrap_or_default();

    let departures = response.departures.as_deref().unwrap_or(&[]);
    let mut pattern = Vec::with_capacity(departures.len());

    for departure in departures {
        let stop_id = StopId(departure.stop_id);
        let stop = lookup
            .get(&stop_id)
            .ok_or(ProjectionError::UnknownStop(stop_id))?;

        let mut serviced = pattern_stop(stop, false);
        serviced.scheduled_departure = departure
            .scheduled_departure_utc
            .as_deref()
            .and_then(parse_utc);
        pattern.push(serviced);

        if include_skipped {
            pattern.extend(
                departure
                    .skipped_stops
                    .as_deref()
                    .unwrap_or(&[])
                    .iter()
                    .map(|skipped| pattern_stop(skipped, true)),
            );
        }
    }

    Ok(pattern)
}

fn pattern_stop(stop: &StopDto, skipped: bool) -> PatternStop {
    PatternStop {
        stop_id: StopId(stop.stop_id),
        name: stop.stop_name.clone(),
        coordinates: Coordinates::new(stop.stop_latitude, stop.stop_longitude),
        skipped,
        scheduled_departure: None,
    }
}

fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    match s.parse::<DateTime<Utc>>() {
        Ok(t) => Some(t),
        Err(e) => {
            warn!(value = s, error = %e, "ignoring unparseable departure time");
            None
        }
    }
}
