use crate::models::common::{Location, TimeInterval, Timestamp};
use std::sync::Arc;

/// Represents a driver, person who drives a vehicle.
/// Driver's operating time limit is not a part of the model: it is supplied by the caller
/// constructing the driver time feature.
#[derive(Clone, Debug)]
pub struct Driver {
    /// Driver id.
    pub id: String,
}

impl Driver {
    /// Creates a new instance of `Driver`.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// Represents a vehicle place: start or end of the vehicle's tour.
#[derive(Clone, Debug)]
pub struct VehiclePlace {
    /// Location of the place.
    pub location: Location,

    /// Time interval when vehicle can be at the place: earliest/latest departure for start,
    /// earliest/latest arrival for end.
    pub time: TimeInterval,
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,

    /// Vehicle start place.
    pub start: VehiclePlace,

    /// Vehicle end place. If not set, vehicle returns to its start location.
    pub end: Option<VehiclePlace>,
}

impl Vehicle {
    /// Returns the earliest time when vehicle can depart from its start location.
    pub fn earliest_departure(&self) -> Timestamp {
        self.start.time.earliest.unwrap_or(0.)
    }

    /// Returns the latest time when vehicle can depart from its start location.
    pub fn latest_departure(&self) -> Timestamp {
        self.start.time.latest.unwrap_or(Timestamp::MAX)
    }

    /// Returns the latest time when vehicle has to be back at its end location. Hard bound.
    pub fn latest_arrival(&self) -> Timestamp {
        self.end.as_ref().and_then(|end| end.time.latest).unwrap_or(Timestamp::MAX)
    }

    /// Returns vehicle's end location.
    pub fn end_location(&self) -> Location {
        self.end.as_ref().map_or(self.start.location, |end| end.location)
    }
}

/// Represents an actor: a pair of vehicle and driver which performs a tour.
#[derive(Clone, Debug)]
pub struct Actor {
    /// A vehicle associated within actor.
    pub vehicle: Arc<Vehicle>,

    /// A driver associated within actor.
    pub driver: Arc<Driver>,
}

impl Actor {
    /// Creates a new instance of `Actor`.
    pub fn new(vehicle: Arc<Vehicle>, driver: Arc<Driver>) -> Self {
        Self { vehicle, driver }
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vehicle, &other.vehicle) && Arc::ptr_eq(&self.driver, &other.driver)
    }
}

impl Eq for Actor {}
