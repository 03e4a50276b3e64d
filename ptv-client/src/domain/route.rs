//! Route types, routes and directions.
//!
//! Collections preserve the order in which the API listed their entries,
//! which is what "first match" means for route lookups.

use indexmap::IndexMap;

use super::{DirectionId, RouteId, RouteNumber, RouteTypeId};

/// A transport mode (train, tram, bus, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteType {
    pub id: RouteTypeId,
    pub name: String,
}

/// Route types keyed by ID, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTypes {
    names: IndexMap<RouteTypeId, String>,
}

impl RouteTypes {
    /// Insert a route type, replacing the name of an existing entry with
    /// the same ID. A replaced entry keeps its original position.
    pub fn insert(&mut self, id: RouteTypeId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Look up the name of a route type.
    pub fn name(&self, id: RouteTypeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Returns true if the ID is a known route type.
    pub fn contains(&self, id: RouteTypeId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over route types in listing order.
    pub fn iter(&self) -> impl Iterator<Item = RouteType> + '_ {
        self.names.iter().map(|(id, name)| RouteType {
            id: *id,
            name: name.clone(),
        })
    }
}

/// A route, normalized from the routes listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub number: RouteNumber,
    pub name: String,
    /// Service status description (e.g. "Good Service").
    pub status: String,
    pub route_type: RouteTypeId,
    /// GTFS identifier, when the API provides one.
    pub gtfs_id: Option<String>,
}

impl Route {
    /// The identifying fields returned by route searches.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            id: self.id,
            name: self.name.clone(),
            status: self.status.clone(),
        }
    }
}

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub id: RouteId,
    pub name: String,
    pub status: String,
}

/// Routes grouped by route type, then keyed by route ID.
///
/// Both levels keep listing order. A route ID repeated within one type
/// replaces the earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutesByType {
    by_type: IndexMap<RouteTypeId, IndexMap<RouteId, Route>>,
}

impl RoutesByType {
    /// Insert a route under its own route type.
    pub fn insert(&mut self, route: Route) {
        self.by_type
            .entry(route.route_type)
            .or_default()
            .insert(route.id, route);
    }

    /// Look up a route by type and ID.
    pub fn get(&self, route_type: RouteTypeId, id: RouteId) -> Option<&Route> {
        self.by_type.get(&route_type)?.get(&id)
    }

    /// Iterate over the routes of one type in listing order.
    pub fn of_type(&self, route_type: RouteTypeId) -> impl Iterator<Item = &Route> {
        self.by_type
            .get(&route_type)
            .into_iter()
            .flat_map(IndexMap::values)
    }

    /// Route types present in this collection, in listing order.
    pub fn route_types(&self) -> impl Iterator<Item = RouteTypeId> + '_ {
        self.by_type.keys().copied()
    }

    /// Total number of routes across all types.
    pub fn len(&self) -> usize {
        self.by_type.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the first route of a type whose printed number equals `number`.
    ///
    /// Equality is type-sensitive: a numeric query only matches routes whose
    /// number normalized to an integer, a literal query only matches routes
    /// whose number stayed a string. `Absent` matches nothing.
    pub fn find_by_number(&self, route_type: RouteTypeId, number: &RouteNumber) -> Option<&Route> {
        if number.is_absent() {
            return None;
        }
        self.of_type(route_type).find(|route| &route.number == number)
    }
}

/// Directions of a route, keyed by direction ID, in listing order.
pub type Directions = IndexMap<DirectionId, String>;
