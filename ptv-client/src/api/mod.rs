//! PTV Timetable API v3 resources.
//!
//! Raw response DTOs and the pure projections that turn them into domain
//! collections. The API's JSON is loosely typed: route numbers switch
//! between strings and integers, stops come back unordered unless a
//! direction is given, and skipped stops are nested inside departures.

mod project;
mod types;

pub use project::{
    ProjectionError, decode, project_directions, project_pattern, project_route_types,
    project_routes, project_runs, project_stops,
};
pub use types::{
    DepartureDto, DirectionDto, DirectionsResponse, PatternResponse, RouteDto,
    RouteServiceStatus, RouteTypeDto, RouteTypesResponse, RoutesResponse, RunDto, RunsResponse,
    StopDto, StopOnRouteDto, StopsResponse,
};
