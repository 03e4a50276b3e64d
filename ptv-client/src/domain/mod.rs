//! Domain types for PTV timetable data.
//!
//! These types are the normalized form of the API's loosely-typed JSON.
//! Identifiers and route numbers enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod ids;
mod route;
mod route_number;
mod run;
mod run_ref;
mod stop;

pub use ids::{DirectionId, RouteId, RouteTypeId, StopId};
pub use route::{Directions, Route, RouteSummary, RouteType, RouteTypes, RoutesByType};
pub use route_number::RouteNumber;
pub use run::{Run, Runs};
pub use run_ref::{InvalidRunRef, RunRef};
pub use stop::{Coordinates, PatternStop, Stop};
