//! Vehicle runs.

use indexmap::IndexMap;

use super::{DirectionId, RunRef};

/// One scheduled journey of a vehicle along a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub reference: RunRef,
    pub destination_name: String,
    pub direction_id: DirectionId,
}

/// Runs of a route keyed by reference, in listing order.
pub type Runs = IndexMap<RunRef, Run>;
