//! PTV Timetable API client.
//!
//! This module ties signing, transport and projection together. Key
//! characteristics of the API:
//! - Every request carries `devid` and an HMAC-SHA1 `signature`
//! - Errors still come back as JSON, so non-strict callers can read them
//! - Route numbers, stop order and skipped stops all need normalizing

mod client;
mod error;


pub use client::{ApiResponse, PtvClient, RouteTypeFilter};
pub use error::ApiError;
