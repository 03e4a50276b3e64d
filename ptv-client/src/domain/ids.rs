//! Numeric identifier types.
//!
//! The PTV API hands out plain integers for route types, routes,
//! directions and stops. Wrapping each in its own type stops a stop ID
//! from being passed where a route ID is expected.

use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// Returns the raw numeric value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                $name(value)
            }
        }
    };
}

numeric_id! {
    /// Identifier of a transport mode (train, tram, bus, ...).
    ///
    /// ```
    /// use ptv_client::domain::RouteTypeId;
    ///
    /// let tram = RouteTypeId(1);
    /// assert_eq!(tram.to_string(), "1");
    /// assert_eq!(format!("{tram:?}"), "RouteTypeId(1)");
    /// ```
    RouteTypeId
}

numeric_id! {
    /// Identifier of a route.
    RouteId
}

numeric_id! {
    /// Identifier of a direction of travel, scoped to a route.
    DirectionId
}

numeric_id! {
    /// Identifier of a stop.
    StopId
}
