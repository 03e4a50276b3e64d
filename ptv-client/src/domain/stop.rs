//! Stops and stopping patterns.

use chrono::{DateTime, Utc};

use super::StopId;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A stop served by a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
    /// Position along the route. Only meaningful when the stops were
    /// requested for a specific direction.
    pub sequence: Option<u32>,
    pub suburb: Option<String>,
}

/// One entry in a run's stopping pattern.
///
/// Patterns are chronological: each serviced stop is followed directly by
/// the stops the run passes without servicing before its next call.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternStop {
    pub stop_id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
    /// True if the run passes this stop without servicing it.
    pub skipped: bool,
    /// Scheduled departure, for serviced stops that report one.
    pub scheduled_departure: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_new() {
        let c = Coordinates::new(-37.8183, 144.9671);
        assert_eq!(c.latitude, -37.8183);
        assert_eq!(c.longitude, 144.9671);
    }
}
