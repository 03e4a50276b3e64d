//! PTV Timetable API client.
//!
//! Signs requests for the Public Transport Victoria timetable API and
//! reshapes its loosely-typed JSON into typed route, stop, run and
//! stopping-pattern collections.

pub mod api;
pub mod config;
pub mod domain;
pub mod signing;
pub mod timetable;
pub mod transport;
